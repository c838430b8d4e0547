//! Shared utility functions for code generation.

/// Convert a raw database identifier to a PascalCase type name.
///
/// Every alphabetic run is title-cased (first letter upper, the rest lower)
/// and underscores are removed. A letter that follows any non-letter starts
/// a new run, so `order2items` becomes `Order2Items`.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            if c != '_' {
                result.push(c);
            }
            prev_is_alpha = false;
        }
    }

    result
}

/// Validate that a name is usable as an identifier in every target language.
///
/// Returns None if valid, Some(reason) if invalid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
