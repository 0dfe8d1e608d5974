// web_app/error.rs - Error type for stores, seeding, and configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[cfg(feature = "db-tools")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("directory store not available")]
    StoreUnavailable,
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
