use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Invalid arguments!")]
    Usage,

    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse XML: {0}")]
    Parse(String),

    #[error("Malformed BlogML document: {0}")]
    Schema(String),

    #[error("Post {post} references undeclared category {reference:?}")]
    Reference { post: usize, reference: String },

    #[error("Failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn schema(msg: &str) -> Self {
        ConvertError::Schema(msg.to_string())
    }
}
