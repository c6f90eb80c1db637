use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Cannot transform an empty table")]
    EmptyTable,

    #[error("Column '{column}' has no present values to impute from")]
    DegenerateColumn { column: &'static str },

    #[error("Render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EtlResult<T> = Result<T, EtlError>;
