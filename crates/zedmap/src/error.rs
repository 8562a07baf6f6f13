use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed map file name (expected map_<x>_<y>): {0}")]
    MalformedMapFilename(String),

    #[error("Search needle is empty")]
    EmptyNeedle,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
