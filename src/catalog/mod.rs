mod error;
mod job;
mod loader;


pub use error::CatalogError;
pub use job::{Job, SensorId};
pub use loader::load_catalog;
