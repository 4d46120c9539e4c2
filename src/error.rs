use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("documentation '{slug}' is not installed (try 'docdex download {slug}')")]
    NotInstalled { slug: String },

    #[error("malformed catalog for '{slug}': {source}")]
    MalformedCatalog {
        slug: String,
        source: serde_json::Error,
    },

    #[error("malformed content bundle for '{slug}': {source}")]
    MalformedContent {
        slug: String,
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("data directory does not exist and could not be created: {0}")]
    DataDir(PathBuf),

    #[error("viewer error: {0}")]
    Viewer(String),
}
