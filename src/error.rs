use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Failed to get API response: {0}")]
    Unavailable(String),

    #[error("Missing API key (set SPOONACULAR_API_KEY)")]
    MissingApiKey,

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("No recipes found in response")]
    NoRecipes,
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("File error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything that can go wrong between selecting a tag and saving the
/// record. Absorbed by the top-level handler in `run`, never re-raised.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}
