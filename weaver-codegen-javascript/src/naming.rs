//! JavaScript-specific naming conventions.

use weaver_codegen::naming::NamingConvention;

/// Reserved names of generated Express projects.
pub const JS_NAMING: NamingConvention = NamingConvention {
    language: "javascript",
    keywords: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict mode and module reserved words
        "arguments",
        "await",
        "eval",
        "implements",
        "interface",
        "let",
        "package",
        "private",
        "protected",
        "public",
        "static",
    ],
    // Bindings of the generated modules that do not come from an entity, and
    // the globals they rely on.
    framework_names: &[
        // globals
        "Array",
        "Boolean",
        "Buffer",
        "Date",
        "Error",
        "JSON",
        "Map",
        "Math",
        "Number",
        "Object",
        "Promise",
        "Set",
        "String",
        "Symbol",
        "console",
        "module",
        "process",
        "require",
        // mongoose and sequelize
        "DataTypes",
        "Model",
        "Router",
        "Schema",
        "Sequelize",
        "Types",
        // module bindings
        "PORT",
        "WRITABLE",
        "app",
        "connectDB",
        "cors",
        "express",
        "jwt",
        "mongoose",
        "pick",
        "requireToken",
        "router",
        "sequelize",
        "startServer",
    ],
    // Mongoose refuses these as schema paths.
    model_members: &[
        "collection",
        "db",
        "emit",
        "errors",
        "get",
        "init",
        "isModified",
        "isNew",
        "listeners",
        "modelName",
        "on",
        "once",
        "populated",
        "remove",
        "removeListener",
        "save",
        "schema",
        "toObject",
        "validate",
    ],
};
