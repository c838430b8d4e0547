//! Express.js renderer for the Weaver CRUD project generator.
//!
//! # Generated Output
//!
//! - `app.js` - Express bootstrap, auth middleware, `/` and `/health`
//! - `models/*.js` - Mongoose models (MongoDB) or Sequelize factories (MySQL)
//! - `routes/*Routes.js` - Router factories taking the model
//! - `package.json`, `README.md`

mod naming;
mod renderer;
mod type_mapper;

pub mod files;

pub use naming::JS_NAMING;
pub use renderer::ExpressRenderer;
pub use type_mapper::{MongooseTypeMapper, SequelizeTypeMapper};
