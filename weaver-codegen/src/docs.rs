//! README generation shared by every ecosystem.

use crate::{
    endpoints::CrudOperation,
    identifiers::DerivedEntity,
    renderer::{ProjectLayout, RenderContext},
};

/// Ecosystem-specific facts shown in the README.
#[derive(Debug, Clone, Copy)]
pub struct DocsProfile {
    pub install: &'static str,
    pub run: &'static str,
    /// Environment variable holding the token signing secret.
    pub secret_var: &'static str,
    /// Path of the interactive API docs, when the framework serves them.
    pub interactive_docs: Option<&'static str>,
}

/// Render `README.md` for a generated project.
pub fn render_readme(
    profile: &DocsProfile,
    layout: &ProjectLayout,
    entities: &[DerivedEntity],
    ctx: &RenderContext,
) -> String {
    let names: Vec<&str> = entities.iter().map(|e| e.ids.raw()).collect();
    let base_url = format!("http://localhost:{}", layout.default_port);
    let mut out = String::new();

    out.push_str("# Generated API by API Weaver\n\n");
    out.push_str(&format!("- **Framework:** {}\n", ctx.ecosystem.label()));
    out.push_str(&format!("- **Database:** {}\n", ctx.database()));
    out.push_str(&format!("- **Entities:** {}\n\n", names.join(", ")));

    out.push_str("## Quick Start\n\n");
    out.push_str(&format!(
        "### Installation\n\n```bash\n{}\n```\n\n",
        profile.install
    ));
    out.push_str("### Configuration\n\n");
    out.push_str(&format!(
        "Set `{}` to the connection string of your {} database.\n",
        ctx.database().url_env_var(),
        ctx.database()
    ));
    if ctx.include_auth() {
        out.push_str(&format!(
            "Set `{}` to the secret used to sign access tokens.\n",
            profile.secret_var
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "### Running the API\n\n```bash\n{}\n```\n\nThe server listens on {}.\n\n",
        profile.run, base_url
    ));

    if ctx.include_auth() {
        out.push_str("## Authentication\n\n");
        out.push_str(
            "Every `/api/...` endpoint requires an `Authorization: Bearer <token>` header \
             carrying a JWT signed with the configured secret (HS256). \
             `/` and `/health` stay public.\n\n",
        );
    }

    out.push_str("## API Endpoints\n\n");
    out.push_str("- `GET /` - API information\n");
    out.push_str("- `GET /health` - Health check\n");

    for entity in entities {
        let ids = &entity.ids;
        out.push_str(&format!("\n### {}\n\n", ids.raw()));
        out.push_str("| Method | Path | Description |\n");
        out.push_str("|--------|------|-------------|\n");
        for op in CrudOperation::ALL {
            out.push_str(&format!(
                "| {} | `{}` | {} |\n",
                op.method(),
                op.path(ids),
                op.summary(ids)
            ));
        }

        let mut fields = vec!["`id`".to_string()];
        fields.extend(
            entity
                .columns
                .iter()
                .map(|c| format!("`{}` ({})", c.name, c.declared_type)),
        );
        fields.push("`createdAt`".to_string());
        fields.push("`updatedAt`".to_string());
        out.push_str(&format!("\nFields: {}\n", fields.join(", ")));
    }

    out.push_str("\n## Documentation\n\n");
    if let Some(path) = profile.interactive_docs {
        out.push_str(&format!("- Interactive docs: {}{}\n", base_url, path));
    }
    out.push_str(&format!("- Health check: {}/health\n", base_url));

    out.push_str(&format!(
        "\n---\n\nGenerated by API Weaver on {}\n",
        ctx.stamp
    ));
    out
}

#[cfg(test)]
mod tests {
    use weaver_core::DatabaseKind;
    use weaver_ir::{Ecosystem, Field, SchemaEntity};

    use super::*;
    use crate::{
        identifiers::derive_all,
        renderer::{GenerationStamp, UsedExtras},
    };

    const PROFILE: DocsProfile = DocsProfile {
        install: "pip install -r requirements.txt",
        run: "python main.py",
        secret_var: "JWT_SECRET_KEY",
        interactive_docs: Some("/docs"),
    };

    const LAYOUT: ProjectLayout = ProjectLayout {
        entrypoint: "main.py",
        manifest: "requirements.txt",
        extension: "py",
        separable_routes: false,
        default_port: 8000,
    };

    fn context(auth: bool) -> RenderContext {
        RenderContext {
            ecosystem: Ecosystem::FastApi,
            extras: UsedExtras {
                database: DatabaseKind::Mysql,
                auth,
            },
            stamp: GenerationStamp::new("2024-05-01 12:00:00"),
        }
    }

    #[test]
    fn test_readme_lists_every_endpoint() {
        let entities = derive_all(&[
            SchemaEntity::new("orders").with_field(Field::new("total", "number")),
            SchemaEntity::new("users"),
        ]);

        let readme = render_readme(&PROFILE, &LAYOUT, &entities, &context(false));

        assert!(readme.contains("- **Framework:** FastAPI"));
        assert!(readme.contains("| DELETE | `/api/users/{id}` | Delete users by ID |"));
        assert!(readme.contains("| POST | `/api/orders` | Create orders |"));
        assert!(readme.contains("Fields: `id`, `total` (number), `createdAt`, `updatedAt`"));
        assert!(readme.contains("http://localhost:8000/docs"));
        assert!(readme.contains("`DATABASE_URL`"));
        assert!(!readme.contains("Bearer"));
        assert!(readme.ends_with("Generated by API Weaver on 2024-05-01 12:00:00\n"));
        assert_eq!(readme.matches("| GET |").count(), 4);
    }

    #[test]
    fn test_readme_documents_auth() {
        let entities = derive_all(&[SchemaEntity::new("orders")]);
        let readme = render_readme(&PROFILE, &LAYOUT, &entities, &context(true));

        assert!(readme.contains("## Authentication"));
        assert!(readme.contains("Authorization: Bearer <token>"));
        assert!(readme.contains("`JWT_SECRET_KEY`"));
    }
}
