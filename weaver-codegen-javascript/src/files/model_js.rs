//! `models/{stem}.js` generator.

use weaver_codegen::{
    builder::CodeBuilder, identifiers::DerivedEntity, renderer::ProjectLayout,
};
use weaver_core::{DatabaseKind, FieldKind, GeneratedFile, TypeMapper};

use crate::type_mapper::{MongooseTypeMapper, SequelizeTypeMapper};

/// Accessors every model module exposes, in export order.
pub const MODEL_ACCESSORS: [&str; 5] = ["listAll", "getById", "create", "update", "remove"];

/// A model module.
///
/// MongoDB models export the accessors directly. Sequelize models export a
/// factory taking the shared `sequelize` instance and returning them.
pub struct ModelJs<'a> {
    pub entity: &'a DerivedEntity,
    pub database: DatabaseKind,
    pub layout: ProjectLayout,
}

impl<'a> ModelJs<'a> {
    pub fn new(entity: &'a DerivedEntity, database: DatabaseKind, layout: ProjectLayout) -> Self {
        Self {
            entity,
            database,
            layout,
        }
    }

    fn writable(&self) -> String {
        let names: Vec<String> = self
            .entity
            .columns
            .iter()
            .map(|c| format!("'{}'", c.name))
            .collect();
        format!("[{}]", names.join(", "))
    }

    fn push_pick(&self, code: &mut CodeBuilder) {
        code.push_line(&format!("const WRITABLE = {};", self.writable()))
            .push_line("const pick = (data) =>")
            .push_indent()
            .push_line(
                "Object.fromEntries(Object.entries(data || {}).filter(([key]) => WRITABLE.includes(key)));",
            )
            .push_dedent();
    }

    fn push_exports_object(code: &mut CodeBuilder, prefix: &str) {
        code.push_line(&format!(
            "{}{{ model, {} }};",
            prefix,
            MODEL_ACCESSORS.join(", ")
        ));
    }

    fn render_mongoose(&self) -> String {
        let mapper = MongooseTypeMapper;
        let mut code = CodeBuilder::javascript();

        code.push_line("const mongoose = require('mongoose');")
            .push_blank()
            .push_line("const schema = new mongoose.Schema(")
            .push_indent()
            .push_line("{")
            .push_indent();
        for column in &self.entity.columns {
            let mut options = vec![format!("type: {}", mapper.map_field_kind(column.kind))];
            if !column.nullable {
                options.push("required: true".to_string());
            }
            let comment = match &column.references {
                Some(target) => {
                    if column.kind == FieldKind::ObjectId {
                        options.push(format!("ref: '{}'", target.type_name()));
                    }
                    format!(" // references {}", target.raw())
                }
                None => String::new(),
            };
            code.push_line(&format!(
                "{}: {{ {} }},{}",
                column.name,
                options.join(", "),
                comment
            ));
        }
        code.push_dedent()
            .push_line("},")
            .push_line("{")
            .push_indent()
            .push_line("timestamps: true,")
            .push_line(&format!("collection: '{}',", self.entity.ids.raw()))
            .push_lines(
                r#"toJSON: {
  transform: (_doc, ret) => {
    ret.id = ret._id.toString();
    delete ret._id;
    delete ret.__v;
    return ret;
  },
},"#,
            )
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line(");")
            .push_blank()
            .push_line(&format!(
                "const model = mongoose.model('{}', schema);",
                self.entity.ids.type_name()
            ))
            .push_blank();
        self.push_pick(&mut code);
        code.push_blank().push_lines(
            r#"const listAll = async () => (await model.find()).map((doc) => doc.toJSON());

const getById = async (id) => {
  if (!mongoose.isValidObjectId(id)) return null;
  const doc = await model.findById(id);
  return doc ? doc.toJSON() : null;
};

const create = async (data) => (await model.create(pick(data))).toJSON();

const update = async (id, data) => {
  if (!mongoose.isValidObjectId(id)) return null;
  const doc = await model.findByIdAndUpdate(id, pick(data), { new: true, runValidators: true });
  return doc ? doc.toJSON() : null;
};

const remove = async (id) => {
  if (!mongoose.isValidObjectId(id)) return false;
  const doc = await model.findByIdAndDelete(id);
  return doc !== null;
};
"#,
        );
        code.push_blank();
        Self::push_exports_object(&mut code, "module.exports = ");
        code.build()
    }

    fn render_sequelize(&self) -> String {
        let mapper = SequelizeTypeMapper;
        let mut code = CodeBuilder::javascript();

        code.push_line("const { DataTypes } = require('sequelize');")
            .push_blank()
            .push_line("module.exports = (sequelize) => {")
            .push_indent()
            .push_line("const model = sequelize.define(")
            .push_indent()
            .push_line(&format!("'{}',", self.entity.ids.type_name()))
            .push_line("{")
            .push_indent()
            .push_line("id: { type: DataTypes.INTEGER, primaryKey: true, autoIncrement: true },");
        for column in &self.entity.columns {
            let comment = column
                .references
                .as_ref()
                .map(|target| format!(" // references {}", target.raw()))
                .unwrap_or_default();
            code.push_line(&format!(
                "{}: {{ type: {}, allowNull: {} }},{}",
                column.name,
                mapper.map_field_kind(column.kind),
                column.nullable,
                comment
            ));
        }
        code.push_dedent()
            .push_line("},")
            .push_line(&format!(
                "{{ tableName: '{}', timestamps: true, underscored: true }}",
                self.entity.ids.raw()
            ))
            .push_dedent()
            .push_line(");")
            .push_blank();
        self.push_pick(&mut code);
        code.push_blank().push_lines(
            r#"const listAll = async () => (await model.findAll()).map((record) => record.toJSON());

const getById = async (id) => {
  const record = await model.findByPk(id);
  return record ? record.toJSON() : null;
};

const create = async (data) => (await model.create(pick(data))).toJSON();

const update = async (id, data) => {
  const record = await model.findByPk(id);
  if (!record) return null;
  await record.update(pick(data));
  return record.toJSON();
};

const remove = async (id) => {
  const deleted = await model.destroy({ where: { id } });
  return deleted > 0;
};
"#,
        );
        code.push_blank();
        Self::push_exports_object(&mut code, "return ");
        code.push_dedent().push_line("};");
        code.build()
    }
}

impl GeneratedFile for ModelJs<'_> {
    fn path(&self) -> String {
        self.layout.model_path(&self.entity.ids)
    }

    fn render(&self) -> String {
        match self.database {
            DatabaseKind::Mongodb => self.render_mongoose(),
            DatabaseKind::Mysql => self.render_sequelize(),
        }
    }
}
