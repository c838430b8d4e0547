//! Import and dependency collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use weaver_codegen::imports::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("datetime", "datetime");
/// imports.add("datetime", "date");
/// imports.add("decimal", "Decimal");
///
/// let lines: Vec<String> = imports
///     .iter()
///     .map(|(module, symbols)| {
///         let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
///         format!("from {} import {}", module, symbols.join(", "))
///     })
///     .collect();
/// assert_eq!(lines, ["from datetime import date, datetime", "from decimal import Decimal"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a module import without specific symbols (e.g., `import os`).
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

/// Specification for a package dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Version requirement (e.g., "2.3.3", "^4.18.2")
    pub version: String,
    /// Optional extras or features (e.g., `cryptography` for `python-jose[cryptography]`)
    pub features: Vec<String>,
}

impl DependencySpec {
    /// Create a new dependency with just a version.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            features: Vec::new(),
        }
    }

    /// Add features to enable.
    pub fn with_features(mut self, features: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// Tracks package dependencies with versions and features.
///
/// Dependencies keep the order they were first added in, so manifests list
/// the framework first and optional extras last.
///
/// # Example
///
/// ```
/// use weaver_codegen::imports::{DependencyCollector, DependencySpec};
///
/// let mut deps = DependencyCollector::new();
/// deps.add_simple("Flask", "2.3.3");
/// deps.add("python-jose", DependencySpec::new("3.3.0").with_features(["cryptography"]));
///
/// let names: Vec<&str> = deps.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["Flask", "python-jose"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyCollector {
    deps: IndexMap<String, DependencySpec>,
}

impl DependencyCollector {
    /// Create a new empty dependency collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency. If it already exists, this is a no-op.
    pub fn add(&mut self, name: impl Into<String>, spec: DependencySpec) {
        self.deps.entry(name.into()).or_insert(spec);
    }

    /// Add a simple dependency with just a version.
    pub fn add_simple(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.add(name, DependencySpec::new(version));
    }

    /// Check if a dependency exists.
    pub fn has(&self, name: &str) -> bool {
        self.deps.contains_key(name)
    }

    /// Get a dependency spec.
    pub fn get(&self, name: &str) -> Option<&DependencySpec> {
        self.deps.get(name)
    }

    /// Iterate over all dependencies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DependencySpec)> {
        self.deps.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("typing", "Optional");
        imports.add("typing", "Any");
        imports.add_module("os");

        let modules: Vec<_> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, ["typing", "os"]);

        let typing: Vec<_> = imports.iter().next().unwrap().1.iter().cloned().collect();
        assert_eq!(typing, ["Any", "Optional"]);
    }

    #[test]
    fn test_dependency_collector_first_add_wins() {
        let mut deps = DependencyCollector::new();
        deps.add_simple("express", "^4.18.2");
        deps.add_simple("express", "^5.0.0");
        deps.add(
            "python-jose",
            DependencySpec::new("3.3.0").with_features(["cryptography"]),
        );

        assert_eq!(deps.len(), 2);
        assert_eq!(deps.get("express").unwrap().version, "^4.18.2");
        assert_eq!(deps.get("python-jose").unwrap().features, ["cryptography"]);
        assert!(!deps.has("mongoose"));
    }
}
