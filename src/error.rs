use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Import document could not be parsed: {0}")]
    MalformedImport(#[source] serde_json::Error),

    #[error("Invalid {slot} data: {source}")]
    SlotData {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Could not determine project directories")]
    NoProjectDirs,

    #[error("Could not create data directory: {0}")]
    DataDirCreation(#[from] std::io::Error),
}
