//! `main.py` generator for FastAPI.

use weaver_codegen::{
    builder::CodeBuilder, endpoints::CrudOperation, identifiers::DerivedEntity,
    imports::ImportCollector, renderer::RenderContext,
};
use weaver_core::{DatabaseKind, GeneratedFile};

use super::{
    add_database_imports, name_tuple, push_database_setup, push_entrypoint_docstring,
    push_imports,
};

/// The FastAPI application module.
///
/// FastAPI routes are declared inline, so this file carries all five
/// endpoints of every entity next to `/` and `/health`.
pub struct FastApiMainPy<'a> {
    pub entities: &'a [DerivedEntity],
    pub ctx: &'a RenderContext,
    pub port: u16,
}

impl<'a> FastApiMainPy<'a> {
    pub fn new(entities: &'a [DerivedEntity], ctx: &'a RenderContext, port: u16) -> Self {
        Self {
            entities,
            ctx,
            port,
        }
    }

    fn imports(&self) -> [ImportCollector; 3] {
        let mut stdlib = ImportCollector::new();
        let mut third_party = ImportCollector::new();
        let mut local = ImportCollector::new();

        stdlib.add_module("os");
        stdlib.add("datetime", "datetime");
        stdlib.add("datetime", "timezone");

        third_party.add_module("uvicorn");
        third_party.add("fastapi", "Depends");
        third_party.add("fastapi", "FastAPI");
        third_party.add("fastapi", "HTTPException");
        third_party.add("fastapi.middleware.cors", "CORSMiddleware");
        if self.ctx.include_auth() {
            third_party.add("fastapi.security", "OAuth2PasswordBearer");
            third_party.add("jose", "JWTError");
            third_party.add("jose", "jwt");
        }
        add_database_imports(&mut third_party, self.ctx.database());

        for entity in self.entities {
            let ids = &entity.ids;
            local.add(&format!("models.{}", ids.file_stem()), ids.type_name());
        }

        [stdlib, third_party, local]
    }

    /// `{verb}_{FileStem}`, the module-level handler for one operation.
    pub fn handler_name(entity: &DerivedEntity, op: CrudOperation) -> String {
        format!("{}_{}", op.verb(), entity.ids.file_stem())
    }

    fn push_route(code: &mut CodeBuilder, entity: &DerivedEntity, op: CrudOperation) {
        let ids = &entity.ids;
        let type_name = ids.type_name();
        let path = if op.takes_id() {
            format!("{}/{{record_id}}", ids.collection_path())
        } else {
            ids.collection_path()
        };
        let status = match op {
            CrudOperation::Create => ", status_code=201",
            _ => "",
        };

        let mut params = Vec::new();
        if op.takes_id() {
            params.push("record_id: str".to_string());
        }
        if op.has_body() {
            params.push(format!("payload: {}.Payload", type_name));
        }
        params.push("db=Depends(open_db)".to_string());

        code.push_line(&format!(
            "@app.{}(\"{}\"{}, tags=[\"{}\"], summary=\"{}\", dependencies=API_DEPENDENCIES)",
            op.method().to_lowercase(),
            path,
            status,
            ids.raw(),
            op.summary(ids)
        ))
        .push_line(&format!(
            "def {}({}):",
            Self::handler_name(entity, op),
            params.join(", ")
        ))
        .push_indent();

        if op.has_body() {
            code.push_line("data = payload.model_dump(exclude_unset=True)");
        }
        match op {
            CrudOperation::List => {
                code.push_line(&format!("return {}.list_all(db)", type_name));
            }
            CrudOperation::Create => {
                code.push_line(&format!("return {}.create(db, data)", type_name));
            }
            CrudOperation::Get | CrudOperation::Update | CrudOperation::Delete => {
                let call = match op {
                    CrudOperation::Get => format!("{}.get_by_id(db, record_id)", type_name),
                    CrudOperation::Update => format!("{}.update(db, record_id, data)", type_name),
                    _ => format!("{}.delete(db, record_id)", type_name),
                };
                let missing = if op == CrudOperation::Delete {
                    "if not result:"
                } else {
                    "if result is None:"
                };
                code.push_line(&format!("result = {}", call))
                    .push_line(missing)
                    .push_indent()
                    .push_line(&format!(
                        "raise HTTPException(status_code=404, detail=\"{} not found\")",
                        type_name
                    ))
                    .push_dedent();
                if op == CrudOperation::Delete {
                    code.push_line(&format!("return {{\"message\": \"{} deleted\"}}", type_name));
                } else {
                    code.push_line("return result");
                }
            }
        }
        code.push_dedent();
    }
}

impl GeneratedFile for FastApiMainPy<'_> {
    fn path(&self) -> String {
        "main.py".to_string()
    }

    fn render(&self) -> String {
        let database = self.ctx.database();
        let mut code = CodeBuilder::python();

        push_entrypoint_docstring(
            &mut code,
            self.ctx.ecosystem,
            database,
            self.entities,
            self.ctx.stamp.as_str(),
        );
        code.push_blank();
        let [stdlib, third_party, local] = self.imports();
        push_imports(&mut code, &[&stdlib, &third_party, &local]);

        code.push_blank()
            .push_line(&format!(
                "MODELS = {}",
                name_tuple(self.entities.iter().map(|e| e.ids.type_name()))
            ))
            .push_blank()
            .push_lines(
                r#"app = FastAPI(
    title="Generated API by API Weaver",
    description="CRUD API generated from an existing database schema",
    version="1.0.0",
)
app.add_middleware(
    CORSMiddleware,
    allow_origins=["*"],
    allow_credentials=True,
    allow_methods=["*"],
    allow_headers=["*"],
)
"#,
            )
            .push_blank();

        push_database_setup(&mut code, database);
        code.push_blank().push_blank();
        match database {
            DatabaseKind::Mysql => code.push_lines(
                r#"def open_db():
    with SessionLocal() as db:
        yield db"#,
            ),
            DatabaseKind::Mongodb => code.push_lines(
                r#"def open_db():
    yield mongo_db"#,
            ),
        };
        code.push_blank().push_blank();

        if self.ctx.include_auth() {
            code.push_lines(
                r#"SECRET_KEY = os.environ.get("JWT_SECRET_KEY", "change-me")
oauth2_scheme = OAuth2PasswordBearer(tokenUrl="token")


def require_token(token: str = Depends(oauth2_scheme)):
    try:
        return jwt.decode(token, SECRET_KEY, algorithms=["HS256"])
    except JWTError:
        raise HTTPException(
            status_code=401,
            detail="Invalid or expired token",
            headers={"WWW-Authenticate": "Bearer"},
        )


API_DEPENDENCIES = [Depends(require_token)]"#,
            );
        } else {
            code.push_line("API_DEPENDENCIES = []");
        }

        code.push_blank()
            .push_blank()
            .push_lines(&format!(
                r#"@app.get("/")
def index():
    return {{
        "message": "Generated API by API Weaver",
        "version": "1.0.0",
        "framework": "{framework}",
        "database": "{database}",
        "endpoints": {{model.resource: f"/api/{{model.resource}}" for model in MODELS}},
        "docs": "/docs",
    }}


@app.get("/health")
def health():
    return {{"status": "healthy", "timestamp": datetime.now(timezone.utc).isoformat()}}"#,
                framework = self.ctx.ecosystem.label(),
                database = database,
            ));

        for entity in self.entities {
            for op in CrudOperation::ALL {
                code.push_blank().push_blank();
                Self::push_route(&mut code, entity, op);
            }
        }

        code.push_blank().push_blank().push_line("if __name__ == \"__main__\":").push_indent();
        if database.is_relational() {
            code.push_line("for model in MODELS:")
                .push_indent()
                .push_line("model.metadata.create_all(engine)")
                .push_dedent();
        }
        code.push_line(&format!(
            "uvicorn.run(app, host=\"0.0.0.0\", port=int(os.environ.get(\"PORT\", {})))",
            self.port
        ))
        .push_dedent();

        code.build()
    }
}

#[cfg(test)]
mod tests {
    use weaver_codegen::{
        identifiers::derive_all,
        renderer::{GenerationStamp, UsedExtras},
    };
    use weaver_ir::{Ecosystem, Field, SchemaEntity};

    use super::*;

    fn context(database: DatabaseKind, auth: bool) -> RenderContext {
        RenderContext {
            ecosystem: Ecosystem::FastApi,
            extras: UsedExtras { database, auth },
            stamp: GenerationStamp::new("2024-05-01 12:00:00"),
        }
    }

    #[test]
    fn test_inline_routes() {
        let entities = derive_all(&[
            SchemaEntity::new("orders").with_field(Field::new("total", "float")),
            SchemaEntity::new("users"),
        ]);
        let ctx = context(DatabaseKind::Mysql, false);
        let code = FastApiMainPy::new(&entities, &ctx, 8000).render();

        assert!(code.contains("Framework: FastAPI\n"));
        assert!(code.contains("from models.orders import Orders\n"));
        assert!(code.contains("API_DEPENDENCIES = []"));
        assert!(code.contains(
            "@app.get(\"/api/orders\", tags=[\"orders\"], summary=\"List all orders\", dependencies=API_DEPENDENCIES)\ndef list_orders(db=Depends(open_db)):"
        ));
        assert!(code.contains(
            "@app.post(\"/api/users\", status_code=201, tags=[\"users\"], summary=\"Create users\", dependencies=API_DEPENDENCIES)"
        ));
        assert!(code.contains(
            "def update_users(record_id: str, payload: Users.Payload, db=Depends(open_db)):"
        ));
        assert!(code.contains("@app.delete(\"/api/users/{record_id}\""));
        assert!(code.contains("raise HTTPException(status_code=404, detail=\"Users not found\")"));
        assert!(code.contains("    with SessionLocal() as db:"));
        assert!(code.contains("uvicorn.run(app, host=\"0.0.0.0\", port=int(os.environ.get(\"PORT\", 8000)))"));
        assert_eq!(code.matches("dependencies=API_DEPENDENCIES)").count(), 10);
        assert!(!code.contains("jose"));
    }

    #[test]
    fn test_auth_dependency() {
        let entities = derive_all(&[SchemaEntity::new("orders")]);
        let ctx = context(DatabaseKind::Mongodb, true);
        let code = FastApiMainPy::new(&entities, &ctx, 8000).render();

        assert!(code.contains("from jose import JWTError, jwt"));
        assert!(code.contains("API_DEPENDENCIES = [Depends(require_token)]"));
        assert!(code.contains("algorithms=[\"HS256\"]"));
        assert!(code.contains("    yield mongo_db"));
        assert!(!code.contains("create_all"));
    }
}
