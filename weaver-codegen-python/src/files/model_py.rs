//! `models/{stem}.py` generator.

use weaver_codegen::{
    builder::CodeBuilder, identifiers::DerivedEntity, imports::ImportCollector,
    renderer::ProjectLayout,
};
use weaver_core::{DatabaseKind, GeneratedFile, TypeMapper};

use super::{push_imports, str_tuple};
use crate::type_mapper::{PydanticTypeMapper, SqlAlchemyTypeMapper};

/// A model module: one class exposing `list_all`, `get_by_id`, `create`,
/// `update` and `delete` classmethods over a database handle.
///
/// SQL models are SQLAlchemy declarative classes with their own `Base`.
/// MongoDB models are plain classes over a pymongo database. With
/// `payload` set, a pydantic request body class is emitted as well and
/// attached to the model as `Payload`.
pub struct ModelPy<'a> {
    pub entity: &'a DerivedEntity,
    pub database: DatabaseKind,
    pub layout: ProjectLayout,
    pub payload: bool,
}

impl<'a> ModelPy<'a> {
    pub fn new(entity: &'a DerivedEntity, database: DatabaseKind, layout: ProjectLayout) -> Self {
        Self {
            entity,
            database,
            layout,
            payload: false,
        }
    }

    pub fn with_payload(mut self, payload: bool) -> Self {
        self.payload = payload;
        self
    }

    fn type_name(&self) -> &str {
        self.entity.ids.type_name()
    }

    fn payload_name(&self) -> String {
        format!("{}Payload", self.type_name())
    }

    fn writable(&self) -> String {
        str_tuple(self.entity.columns.iter().map(|c| c.name.as_str()))
    }

    fn imports(&self) -> [ImportCollector; 2] {
        let mut stdlib = ImportCollector::new();
        let mut third_party = ImportCollector::new();

        stdlib.add("datetime", "datetime");
        match self.database {
            DatabaseKind::Mysql => {
                stdlib.add("datetime", "date");
                stdlib.add("decimal", "Decimal");
                third_party.add_module("sqlalchemy as sa");
                third_party.add("sqlalchemy.orm", "declarative_base");
            }
            DatabaseKind::Mongodb => {
                third_party.add("bson", "ObjectId");
                third_party.add("bson.errors", "InvalidId");
                third_party.add("pymongo", "ReturnDocument");
            }
        }

        if self.payload {
            let mapper = PydanticTypeMapper {
                database: self.database,
            };
            stdlib.add("typing", "Optional");
            for column in &self.entity.columns {
                match mapper.map_field_kind(column.kind).as_str() {
                    "Any" => stdlib.add("typing", "Any"),
                    "Decimal" => stdlib.add("decimal", "Decimal"),
                    "date" => stdlib.add("datetime", "date"),
                    _ => {}
                }
            }
            third_party.add("pydantic", "BaseModel");
        }

        [stdlib, third_party]
    }

    fn push_payload(&self, code: &mut CodeBuilder) {
        let mapper = PydanticTypeMapper {
            database: self.database,
        };

        code.push_line(&format!("class {}(BaseModel):", self.payload_name()))
            .push_indent();
        if self.entity.columns.is_empty() {
            code.push_line("pass");
        }
        for column in &self.entity.columns {
            code.push_line(&format!(
                "{}: Optional[{}] = None",
                column.name,
                mapper.map_field_kind(column.kind)
            ));
        }
        code.push_dedent().push_blank().push_blank();
    }

    fn push_sql_model(&self, code: &mut CodeBuilder) {
        let mapper = SqlAlchemyTypeMapper;
        let ids = &self.entity.ids;

        code.push_line("Base = declarative_base()")
            .push_blank()
            .push_blank();
        if self.payload {
            self.push_payload(code);
        }

        code.push_line(&format!("class {}(Base):", self.type_name()))
            .push_indent()
            .push_line(&format!("__tablename__ = \"{}\"", ids.raw()))
            .push_blank()
            .push_line(&format!("resource = \"{}\"", ids.route_segment()))
            .push_line(&format!("writable = {}", self.writable()));
        if self.payload {
            code.push_line(&format!("Payload = {}", self.payload_name()));
        }
        code.push_blank()
            .push_line("id = sa.Column(sa.Integer, primary_key=True, autoincrement=True)");

        for column in &self.entity.columns {
            let definition = format!(
                "{} = sa.Column({}, nullable={})",
                column.name,
                mapper.map_field_kind(column.kind),
                if column.nullable { "True" } else { "False" }
            );
            match &column.references {
                Some(target) => {
                    code.push_line(&format!("{}  # references {}", definition, target.raw()))
                }
                None => code.push_line(&definition),
            };
        }

        code.push_line("created_at = sa.Column(sa.DateTime, default=datetime.utcnow, nullable=False)")
            .push_line(
                "updated_at = sa.Column(sa.DateTime, default=datetime.utcnow, onupdate=datetime.utcnow, nullable=False)",
            )
            .push_blank()
            .push_lines(
                r#"@staticmethod
def _json(value):
    if isinstance(value, (datetime, date)):
        return value.isoformat()
    if isinstance(value, Decimal):
        return float(value)
    if isinstance(value, bytes):
        return value.hex()
    return value

@staticmethod
def _key(record_id):
    try:
        return int(record_id)
    except (TypeError, ValueError):
        return None
"#,
            )
            .push_blank()
            .push_line("@classmethod")
            .push_line("def serialize(cls, record):")
            .push_indent()
            .push_line("return {")
            .push_indent()
            .push_line("\"id\": record.id,");
        for column in &self.entity.columns {
            code.push_line(&format!(
                "\"{}\": cls._json(record.{}),",
                column.name, column.name
            ));
        }
        code.push_line("\"createdAt\": cls._json(record.created_at),")
            .push_line("\"updatedAt\": cls._json(record.updated_at),")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_blank()
            .push_lines(
                r#"@classmethod
def list_all(cls, db):
    return [cls.serialize(record) for record in db.query(cls).all()]

@classmethod
def get_by_id(cls, db, record_id):
    key = cls._key(record_id)
    record = db.get(cls, key) if key is not None else None
    return cls.serialize(record) if record is not None else None

@classmethod
def create(cls, db, data):
    record = cls(**{name: value for name, value in data.items() if name in cls.writable})
    db.add(record)
    db.commit()
    db.refresh(record)
    return cls.serialize(record)

@classmethod
def update(cls, db, record_id, data):
    key = cls._key(record_id)
    record = db.get(cls, key) if key is not None else None
    if record is None:
        return None
    for name, value in data.items():
        if name in cls.writable:
            setattr(record, name, value)
    db.commit()
    db.refresh(record)
    return cls.serialize(record)

@classmethod
def delete(cls, db, record_id):
    key = cls._key(record_id)
    record = db.get(cls, key) if key is not None else None
    if record is None:
        return False
    db.delete(record)
    db.commit()
    return True"#,
            )
            .push_dedent();
    }

    fn push_mongo_model(&self, code: &mut CodeBuilder) {
        let ids = &self.entity.ids;

        if self.payload {
            self.push_payload(code);
        }

        code.push_line(&format!("class {}:", self.type_name()))
            .push_indent()
            .push_line(&format!("collection_name = \"{}\"", ids.raw()))
            .push_line(&format!("resource = \"{}\"", ids.route_segment()))
            .push_line(&format!("writable = {}", self.writable()));
        if self.payload {
            code.push_line(&format!("Payload = {}", self.payload_name()));
        }
        let references = self
            .entity
            .columns
            .iter()
            .filter_map(|c| c.references.as_ref().map(|target| (&c.name, target)));
        for (name, target) in references {
            code.push_comment("#", &format!("{} references {}", name, target.raw()));
        }

        code.push_blank()
            .push_lines(
                r#"@staticmethod
def _object_id(record_id):
    try:
        return ObjectId(record_id)
    except (InvalidId, TypeError):
        return None

@staticmethod
def _json(value):
    if isinstance(value, datetime):
        return value.isoformat()
    if isinstance(value, ObjectId):
        return str(value)
    return value
"#,
            )
            .push_blank()
            .push_line("@classmethod")
            .push_line("def serialize(cls, document):")
            .push_indent()
            .push_line("return {")
            .push_indent()
            .push_line("\"id\": str(document[\"_id\"]),");
        for column in &self.entity.columns {
            code.push_line(&format!(
                "\"{}\": cls._json(document.get(\"{}\")),",
                column.name, column.name
            ));
        }
        code.push_line("\"createdAt\": cls._json(document.get(\"created_at\")),")
            .push_line("\"updatedAt\": cls._json(document.get(\"updated_at\")),")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_blank()
            .push_lines(
                r#"@classmethod
def list_all(cls, db):
    return [cls.serialize(document) for document in db[cls.collection_name].find()]

@classmethod
def get_by_id(cls, db, record_id):
    key = cls._object_id(record_id)
    if key is None:
        return None
    document = db[cls.collection_name].find_one({"_id": key})
    return cls.serialize(document) if document is not None else None

@classmethod
def create(cls, db, data):
    now = datetime.utcnow()
    document = {name: value for name, value in data.items() if name in cls.writable}
    document["created_at"] = now
    document["updated_at"] = now
    result = db[cls.collection_name].insert_one(document)
    document["_id"] = result.inserted_id
    return cls.serialize(document)

@classmethod
def update(cls, db, record_id, data):
    key = cls._object_id(record_id)
    if key is None:
        return None
    changes = {name: value for name, value in data.items() if name in cls.writable}
    changes["updated_at"] = datetime.utcnow()
    document = db[cls.collection_name].find_one_and_update(
        {"_id": key},
        {"$set": changes},
        return_document=ReturnDocument.AFTER,
    )
    return cls.serialize(document) if document is not None else None

@classmethod
def delete(cls, db, record_id):
    key = cls._object_id(record_id)
    if key is None:
        return False
    result = db[cls.collection_name].delete_one({"_id": key})
    return result.deleted_count == 1"#,
            )
            .push_dedent();
    }
}

impl GeneratedFile for ModelPy<'_> {
    fn path(&self) -> String {
        self.layout.model_path(&self.entity.ids)
    }

    fn render(&self) -> String {
        let mut code = CodeBuilder::python();
        code.push_line(&format!("\"\"\"{} model.\"\"\"", self.entity.ids.raw()))
            .push_blank();

        let [stdlib, third_party] = self.imports();
        push_imports(&mut code, &[&stdlib, &third_party]);
        code.push_blank().push_blank();

        match self.database {
            DatabaseKind::Mysql => self.push_sql_model(&mut code),
            DatabaseKind::Mongodb => self.push_mongo_model(&mut code),
        }
        code.build()
    }
}
