//! `app.py` generator for Flask.

use weaver_codegen::{
    builder::CodeBuilder, identifiers::DerivedEntity, imports::ImportCollector,
    renderer::RenderContext,
};
use weaver_core::{DatabaseKind, GeneratedFile};

use super::{
    FlaskRoutesPy, add_database_imports, name_tuple, push_database_setup,
    push_entrypoint_docstring, push_imports,
};

/// The Flask application module.
///
/// Registers one blueprint per entity, exposes `/` and `/health`, and
/// stores a database opener in `app.config["OPEN_DB"]` for the routes.
pub struct FlaskAppPy<'a> {
    pub entities: &'a [DerivedEntity],
    pub ctx: &'a RenderContext,
    pub port: u16,
}

impl<'a> FlaskAppPy<'a> {
    pub fn new(entities: &'a [DerivedEntity], ctx: &'a RenderContext, port: u16) -> Self {
        Self {
            entities,
            ctx,
            port,
        }
    }

    fn imports(&self) -> [ImportCollector; 3] {
        let database = self.ctx.database();
        let mut stdlib = ImportCollector::new();
        let mut third_party = ImportCollector::new();
        let mut local = ImportCollector::new();

        stdlib.add_module("os");
        stdlib.add("datetime", "datetime");
        stdlib.add("datetime", "timezone");
        if database == DatabaseKind::Mongodb {
            stdlib.add("contextlib", "nullcontext");
        }

        third_party.add("flask", "Flask");
        third_party.add("flask", "jsonify");
        third_party.add("flask_cors", "CORS");
        if self.ctx.include_auth() {
            third_party.add("flask", "request");
            third_party.add("flask_jwt_extended", "JWTManager");
            third_party.add("flask_jwt_extended", "verify_jwt_in_request");
        }
        add_database_imports(&mut third_party, database);

        for entity in self.entities {
            let ids = &entity.ids;
            local.add(&format!("models.{}", ids.file_stem()), ids.type_name());
        }
        for entity in self.entities {
            local.add(
                &format!("routes.{}Routes", entity.ids.file_stem()),
                &FlaskRoutesPy::blueprint_var(entity),
            );
        }

        [stdlib, third_party, local]
    }
}

impl GeneratedFile for FlaskAppPy<'_> {
    fn path(&self) -> String {
        "app.py".to_string()
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
            .push_line("app = Flask(__name__)")
            .push_line("CORS(app)")
            .push_blank();

        push_database_setup(&mut code, database);
        match database {
            DatabaseKind::Mysql => code.push_line("app.config[\"OPEN_DB\"] = SessionLocal"),
            DatabaseKind::Mongodb => {
                code.push_line("app.config[\"OPEN_DB\"] = lambda: nullcontext(mongo_db)")
            }
        };

        if self.ctx.include_auth() {
            code.push_blank()
                .push_line(
                    "app.config[\"JWT_SECRET_KEY\"] = os.environ.get(\"JWT_SECRET_KEY\", \"change-me\")",
                )
                .push_line("jwt = JWTManager(app)")
                .push_blank()
                .push_blank()
                .push_lines(
                    r#"@app.before_request
def require_token():
    if request.path.startswith("/api/"):
        verify_jwt_in_request()"#,
                );
        }

        code.push_blank();
        for entity in self.entities {
            code.push_line(&format!(
                "app.register_blueprint({}, url_prefix=\"{}\")",
                FlaskRoutesPy::blueprint_var(entity),
                entity.ids.collection_path()
            ));
        }

        code.push_blank()
            .push_blank()
            .push_lines(&format!(
                r#"@app.route("/")
def index():
    return jsonify({{
        "message": "Generated API by API Weaver",
        "version": "1.0.0",
        "framework": "{framework}",
        "database": "{database}",
        "endpoints": {{model.resource: f"/api/{{model.resource}}" for model in MODELS}},
    }})


@app.route("/health")
def health():
    return jsonify({{"status": "healthy", "timestamp": datetime.now(timezone.utc).isoformat()}})


if __name__ == "__main__":"#,
                framework = self.ctx.ecosystem.label(),
                database = database,
            ))
            .push_indent();
        if database.is_relational() {
            code.push_line("for model in MODELS:")
                .push_indent()
                .push_line("model.metadata.create_all(engine)")
                .push_dedent();
        }
        code.push_line(&format!(
            "app.run(host=\"0.0.0.0\", port=int(os.environ.get(\"PORT\", {})))",
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
    use weaver_ir::{Ecosystem, SchemaEntity};

    use super::*;

    fn context(database: DatabaseKind, auth: bool) -> RenderContext {
        RenderContext {
            ecosystem: Ecosystem::Flask,
            extras: UsedExtras { database, auth },
            stamp: GenerationStamp::new("2024-05-01 12:00:00"),
        }
    }

    fn entities() -> Vec<DerivedEntity> {
        derive_all(&[SchemaEntity::new("orders"), SchemaEntity::new("user_profiles")])
    }

    #[test]
    fn test_wires_every_entity() {
        let entities = entities();
        let ctx = context(DatabaseKind::Mysql, false);
        let code = FlaskAppPy::new(&entities, &ctx, 5000).render();

        assert!(code.starts_with("\"\"\"\nGenerated API by API Weaver\nFramework: Flask\n"));
        assert!(code.contains("Entities: orders, user_profiles\n"));
        assert!(code.contains("Generated on: 2024-05-01 12:00:00\n"));
        assert!(code.contains("from models.orders import Orders\n"));
        assert!(code.contains("from models.user_profiles import UserProfiles\n"));
        assert!(code.contains("from routes.user_profilesRoutes import user_profiles_bp\n"));
        assert!(code.contains("MODELS = (Orders, UserProfiles)"));
        assert!(code.contains(
            "app.register_blueprint(user_profiles_bp, url_prefix=\"/api/user_profiles\")"
        ));
        assert!(code.contains("@app.route(\"/health\")"));
        assert!(code.contains("        model.metadata.create_all(engine)"));
        assert!(code.contains("port=int(os.environ.get(\"PORT\", 5000))"));
        assert!(code.contains("import sqlalchemy as sa"));
        assert!(!code.contains("JWTManager"));
    }

    #[test]
    fn test_mongo_and_auth_wiring() {
        let entities = entities();
        let ctx = context(DatabaseKind::Mongodb, true);
        let code = FlaskAppPy::new(&entities, &ctx, 5000).render();

        assert!(code.contains("from pymongo import MongoClient"));
        assert!(code.contains("os.environ.get(\"MONGODB_URI\", \"mongodb://localhost:27017\")"));
        assert!(code.contains("app.config[\"OPEN_DB\"] = lambda: nullcontext(mongo_db)"));
        assert!(code.contains("jwt = JWTManager(app)"));
        assert!(code.contains("        verify_jwt_in_request()"));
        assert!(!code.contains("create_all"));
        assert!(!code.contains("sqlalchemy"));
    }
}
