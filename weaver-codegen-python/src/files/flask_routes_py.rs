//! `routes/{stem}Routes.py` generator for Flask.

use weaver_codegen::{
    builder::CodeBuilder, endpoints::CrudOperation, identifiers::DerivedEntity,
    renderer::ProjectLayout,
};
use weaver_core::GeneratedFile;

/// A Flask blueprint with the five CRUD routes of one entity.
///
/// The blueprint is named `{stem}_bp` and mounted by `app.py` below the
/// entity's collection path, so its rules are relative.
pub struct FlaskRoutesPy<'a> {
    pub entity: &'a DerivedEntity,
    pub layout: ProjectLayout,
}

impl<'a> FlaskRoutesPy<'a> {
    pub fn new(entity: &'a DerivedEntity, layout: ProjectLayout) -> Self {
        Self { entity, layout }
    }

    /// Name of the blueprint variable.
    pub fn blueprint_var(entity: &DerivedEntity) -> String {
        format!("{}_bp", entity.ids.file_stem())
    }

    fn push_route(&self, code: &mut CodeBuilder, op: CrudOperation) {
        let ids = &self.entity.ids;
        let type_name = ids.type_name();
        let rule = if op.takes_id() { "/<record_id>" } else { "" };
        let params = if op.takes_id() { "record_id" } else { "" };

        code.push_line(&format!(
            "@{}.route(\"{}\", methods=[\"{}\"])",
            Self::blueprint_var(self.entity),
            rule,
            op.method()
        ))
        .push_line(&format!("def {}_{}({}):", op.verb(), ids.file_stem(), params))
        .push_indent();

        if op.has_body() {
            code.push_line("data = request.get_json(silent=True) or {}");
        }
        let call = match op {
            CrudOperation::List => {
                code.push_line("with _open_db() as db:")
                    .push_indent()
                    .push_line(&format!("return jsonify({}.list_all(db))", type_name))
                    .push_dedent()
                    .push_dedent();
                return;
            }
            CrudOperation::Get => format!("{}.get_by_id(db, record_id)", type_name),
            CrudOperation::Create => format!("{}.create(db, data)", type_name),
            CrudOperation::Update => format!("{}.update(db, record_id, data)", type_name),
            CrudOperation::Delete => format!("{}.delete(db, record_id)", type_name),
        };

        code.push_line("with _open_db() as db:")
            .push_indent()
            .push_line(&format!("result = {}", call))
            .push_dedent();

        match op {
            CrudOperation::Create => {
                code.push_line("return jsonify(result), 201");
            }
            CrudOperation::Delete => {
                code.push_line("if not result:")
                    .push_indent()
                    .push_line(&not_found(type_name))
                    .push_dedent()
                    .push_line(&format!(
                        "return jsonify({{\"message\": \"{} deleted\"}})",
                        type_name
                    ));
            }
            _ => {
                code.push_line("if result is None:")
                    .push_indent()
                    .push_line(&not_found(type_name))
                    .push_dedent()
                    .push_line("return jsonify(result)");
            }
        }
        code.push_dedent();
    }
}

fn not_found(type_name: &str) -> String {
    format!(
        "return jsonify({{\"error\": \"{} not found\"}}), 404",
        type_name
    )
}

impl GeneratedFile for FlaskRoutesPy<'_> {
    fn path(&self) -> String {
        self.layout
            .routes_path(&self.entity.ids)
            .unwrap_or_default()
    }

    fn render(&self) -> String {
        let ids = &self.entity.ids;
        let mut code = CodeBuilder::python();

        code.push_line(&format!("\"\"\"{} routes.\"\"\"", ids.raw()))
            .push_blank()
            .push_line("from flask import Blueprint, current_app, jsonify, request")
            .push_blank()
            .push_line(&format!(
                "from models.{} import {}",
                ids.file_stem(),
                ids.type_name()
            ))
            .push_blank()
            .push_line(&format!(
                "{} = Blueprint(\"{}\", __name__)",
                Self::blueprint_var(self.entity),
                ids.file_stem()
            ))
            .push_blank()
            .push_blank()
            .push_line("def _open_db():")
            .push_indent()
            .push_line("return current_app.config[\"OPEN_DB\"]()")
            .push_dedent();

        for op in CrudOperation::ALL {
            code.push_blank().push_blank();
            self.push_route(&mut code, op);
        }
        code.build()
    }
}
