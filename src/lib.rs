//! Server-rendered browser for a movie catalog loaded once from a JSON
//! snapshot.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod render;
pub mod routes;

pub use catalog::{Catalog, MovieId, MovieRecord};
pub use config::Settings;
pub use error::{CatalogError, QueryError};
pub use query::has_quality_score;
