//! `routes/{stem}Routes.js` generator.

use weaver_codegen::{
    builder::CodeBuilder, endpoints::CrudOperation, identifiers::DerivedEntity,
    renderer::ProjectLayout,
};
use weaver_core::GeneratedFile;

/// An Express router factory for one entity.
///
/// The module exports `(Model) => router`, so routes never depend on
/// which data layer backs the model.
pub struct RoutesJs<'a> {
    pub entity: &'a DerivedEntity,
    pub layout: ProjectLayout,
}

impl<'a> RoutesJs<'a> {
    pub fn new(entity: &'a DerivedEntity, layout: ProjectLayout) -> Self {
        Self { entity, layout }
    }

    /// Name of the factory binding in `app.js`.
    pub fn factory_var(entity: &DerivedEntity) -> String {
        format!("{}Routes", entity.ids.file_stem())
    }

    fn push_route(&self, code: &mut CodeBuilder, op: CrudOperation) {
        let type_name = self.entity.ids.type_name();
        let path = if op.takes_id() { "/:id" } else { "/" };
        let failure = if op.has_body() { 400 } else { 500 };
        let not_found = |var: &str| {
            format!(
                "if (!{}) return res.status(404).json({{ error: '{} not found' }});",
                var, type_name
            )
        };

        code.push_line(&format!(
            "router.{}('{}', async (req, res) => {{",
            op.method().to_lowercase(),
            path
        ))
        .push_indent()
        .push_line("try {")
        .push_indent();

        match op {
            CrudOperation::List => {
                code.push_line(&format!("res.json(await {}.listAll());", type_name));
            }
            CrudOperation::Get => {
                code.push_line(&format!(
                    "const record = await {}.getById(req.params.id);",
                    type_name
                ))
                .push_line(&not_found("record"))
                .push_line("res.json(record);");
            }
            CrudOperation::Create => {
                code.push_line(&format!(
                    "res.status(201).json(await {}.create(req.body));",
                    type_name
                ));
            }
            CrudOperation::Update => {
                code.push_line(&format!(
                    "const record = await {}.update(req.params.id, req.body);",
                    type_name
                ))
                .push_line(&not_found("record"))
                .push_line("res.json(record);");
            }
            CrudOperation::Delete => {
                code.push_line(&format!(
                    "const deleted = await {}.remove(req.params.id);",
                    type_name
                ))
                .push_line(&not_found("deleted"))
                .push_line(&format!(
                    "res.json({{ message: '{} deleted' }});",
                    type_name
                ));
            }
        }

        code.push_dedent()
            .push_line("} catch (error) {")
            .push_indent()
            .push_line(&format!(
                "res.status({}).json({{ error: error.message }});",
                failure
            ))
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("});");
    }
}

impl GeneratedFile for RoutesJs<'_> {
    fn path(&self) -> String {
        self.layout
            .routes_path(&self.entity.ids)
            .unwrap_or_default()
    }

    fn render(&self) -> String {
        let mut code = CodeBuilder::javascript();

        code.push_line("const express = require('express');")
            .push_blank()
            .push_line(&format!(
                "module.exports = ({}) => {{",
                self.entity.ids.type_name()
            ))
            .push_indent()
            .push_line("const router = express.Router();");

        for op in CrudOperation::ALL {
            code.push_blank();
            self.push_route(&mut code, op);
        }

        code.push_blank()
            .push_line("return router;")
            .push_dedent()
            .push_line("};");
        code.build()
    }
}
