//! Python renderers for the Weaver CRUD project generator.
//!
//! Two targets share this crate because they share a language, reserved
//! names and the model layer:
//!
//! - [`FlaskRenderer`] - `app.py`, `models/*.py`, `routes/*Routes.py`
//! - [`FastApiRenderer`] - `main.py` with inline routes, `models/*.py`
//!
//! Both emit `requirements.txt` and `README.md`. Models target SQLAlchemy
//! for MySQL and pymongo for MongoDB.
//!
//! ```ignore
//! use weaver_codegen::pipeline::Assembler;
//! use weaver_codegen_python::FlaskRenderer;
//!
//! let assembly = Assembler::new(&registry).assemble(&request, stamp)?;
//! ```

mod naming;
mod renderer;
mod type_mapper;

pub mod files;

pub use naming::PYTHON_NAMING;
pub use renderer::{FastApiRenderer, FlaskRenderer};
pub use type_mapper::{PydanticTypeMapper, SqlAlchemyTypeMapper};
