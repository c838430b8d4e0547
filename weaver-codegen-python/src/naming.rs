//! Python-specific naming conventions.

use weaver_codegen::naming::NamingConvention;

/// Reserved names of generated Flask and FastAPI projects.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    language: "python",
    keywords: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    // Top-level bindings of the generated entrypoint, route and model modules
    // that do not come from an entity.
    framework_names: &[
        // imports
        "Any",
        "BaseModel",
        "Blueprint",
        "CORS",
        "CORSMiddleware",
        "Decimal",
        "Depends",
        "FastAPI",
        "Flask",
        "HTTPException",
        "InvalidId",
        "JWTError",
        "JWTManager",
        "MongoClient",
        "OAuth2PasswordBearer",
        "ObjectId",
        "Optional",
        "ReturnDocument",
        "current_app",
        "date",
        "datetime",
        "declarative_base",
        "jsonify",
        "jwt",
        "nullcontext",
        "os",
        "request",
        "sa",
        "sessionmaker",
        "timezone",
        "uvicorn",
        "verify_jwt_in_request",
        // module globals
        "API_DEPENDENCIES",
        "Base",
        "MODELS",
        "SECRET_KEY",
        "SessionLocal",
        "_open_db",
        "app",
        "client",
        "engine",
        "health",
        "index",
        "mongo_db",
        "oauth2_scheme",
        "open_db",
        "require_token",
    ],
    // Class attributes of the generated models. `sa` and `datetime` are
    // looked up in the class body, so a column with that name shadows them.
    model_members: &[
        "Payload",
        "_json",
        "_key",
        "_object_id",
        "collection_name",
        "create",
        "datetime",
        "delete",
        "get_by_id",
        "list_all",
        "metadata",
        "model_config",
        "query",
        "registry",
        "resource",
        "sa",
        "serialize",
        "update",
        "writable",
    ],
};
