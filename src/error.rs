use std::path::PathBuf;

use actix_web::http::StatusCode;
use thiserror::Error;

/// Reasons the movie snapshot could not be turned into a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read movie snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse movie snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Negative results handed back to the request boundary.
///
/// None of these are faults: each maps to a status code and a
/// user-visible message on the error page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Movie not found")]
    PositionNotFound { index: String },

    #[error("No movie found with ID \"{id}\"")]
    IdNotFound { id: String },

    #[error("No movies found with title including \"{query}\".")]
    NoTitleMatches { query: String },

    #[error("Movie title is required.")]
    MissingTitle,

    #[error("Wrong Route")]
    UnroutedRequest,
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::MissingTitle => StatusCode::BAD_REQUEST,
            QueryError::PositionNotFound { .. }
            | QueryError::IdNotFound { .. }
            | QueryError::NoTitleMatches { .. }
            | QueryError::UnroutedRequest => StatusCode::NOT_FOUND,
        }
    }

    /// Heading shown above the message on the error page.
    pub fn page_title(&self) -> &'static str {
        match self {
            QueryError::NoTitleMatches { .. } => "No Results",
            QueryError::UnroutedRequest => "404",
            _ => "Error",
        }
    }
}
