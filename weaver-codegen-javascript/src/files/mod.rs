//! JavaScript file generators.

mod app_js;
mod model_js;
mod package_json;
mod routes_js;

pub use app_js::{AppJs, JWT_SECRET_VAR};
pub use model_js::{MODEL_ACCESSORS, ModelJs};
pub use package_json::PackageJson;
pub use routes_js::RoutesJs;
