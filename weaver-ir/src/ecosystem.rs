//! Target ecosystems.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Backend ecosystem a project is generated for.
///
/// The set is closed: adding a target means adding a variant here and
/// handling it in every exhaustive match over `Ecosystem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Python with Flask blueprints.
    Flask,
    /// Python with FastAPI, routing inlined into `main.py`.
    FastApi,
    /// Node.js with Express routers.
    Express,
}

impl Ecosystem {
    /// Every supported ecosystem, in display order.
    pub const ALL: [Ecosystem; 3] = [Ecosystem::Flask, Ecosystem::FastApi, Ecosystem::Express];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Flask => "flask",
            Ecosystem::FastApi => "fastapi",
            Ecosystem::Express => "express",
        }
    }

    /// Human-readable framework name used in generated documentation.
    pub fn label(&self) -> &'static str {
        match self {
            Ecosystem::Flask => "Flask",
            Ecosystem::FastApi => "FastAPI",
            Ecosystem::Express => "Express.js",
        }
    }

    /// Implementation language of the generated project.
    pub fn language(&self) -> &'static str {
        match self {
            Ecosystem::Flask | Ecosystem::FastApi => "python",
            Ecosystem::Express => "javascript",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ecosystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flask" => Ok(Ecosystem::Flask),
            "fastapi" => Ok(Ecosystem::FastApi),
            "express" | "expressjs" | "express.js" => Ok(Ecosystem::Express),
            _ => Err(format!(
                "unsupported target '{}', expected one of: flask, fastapi, express",
                s
            )),
        }
    }
}
