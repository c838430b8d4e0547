//! Reserved names of generated projects.

use crate::identifiers::IdentifierBundle;

/// Names a renderer cannot accept for entities and fields.
///
/// Reserved names are rejected, never escaped: an escaped module or class
/// name would no longer match the raw name used in routes and documentation.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Language of the generated project (used in messages).
    pub language: &'static str,
    /// Keywords of the target language. Applies to file stems and field names.
    pub keywords: &'static [&'static str],
    /// Names the generated entrypoint and model modules bind at top level.
    /// Applies to type names.
    pub framework_names: &'static [&'static str],
    /// Attribute names the generated models define themselves.
    /// Applies to field names.
    pub model_members: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a keyword of the target language.
    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords.contains(&name)
    }

    /// Check if a type name would shadow a framework import.
    pub fn is_framework_name(&self, name: &str) -> bool {
        self.framework_names.contains(&name)
    }

    /// Explain why an entity's identifiers are unusable, if they are.
    pub fn check_entity(&self, ids: &IdentifierBundle) -> Option<String> {
        if self.is_keyword(ids.file_stem()) {
            return Some(format!(
                "module name '{}' is a {} keyword",
                ids.file_stem(),
                self.language
            ));
        }
        if self.is_framework_name(ids.type_name()) {
            return Some(format!(
                "type name '{}' shadows a framework name in generated {} code",
                ids.type_name(),
                self.language
            ));
        }
        None
    }

    /// Explain why a field name is unusable, if it is.
    pub fn check_field(&self, name: &str) -> Option<String> {
        if self.is_keyword(name) {
            return Some(format!("field '{}' is a {} keyword", name, self.language));
        }
        if self.model_members.contains(&name) {
            return Some(format!(
                "field '{}' clashes with a member of the generated model",
                name
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        language: "python",
        keywords: &["class", "def"],
        framework_names: &["Flask"],
        model_members: &["metadata"],
    };

    #[test]
    fn test_keyword_stem_is_rejected() {
        let ids = IdentifierBundle::derive("class");
        let reason = TEST_NAMING.check_entity(&ids).unwrap();
        assert!(reason.contains("python keyword"));
    }

    #[test]
    fn test_framework_type_name_is_rejected() {
        let ids = IdentifierBundle::derive("flask");
        assert!(TEST_NAMING.check_entity(&ids).is_some());
        assert!(
            TEST_NAMING
                .check_entity(&IdentifierBundle::derive("flasks"))
                .is_none()
        );
    }

    #[test]
    fn test_field_checks() {
        assert!(TEST_NAMING.check_field("def").is_some());
        assert!(TEST_NAMING.check_field("metadata").is_some());
        assert!(TEST_NAMING.check_field("total").is_none());
    }
}
