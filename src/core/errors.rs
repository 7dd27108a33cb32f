use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksheetError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("No responses have been saved yet")]
    NothingToExport,

    #[error("Invalid export document: {0}")]
    InvalidExport(String),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("section {0} is declared more than once")]
    DuplicateSection(u8),

    #[error("section {0} has no fields")]
    EmptySection(u8),

    #[error("section ordinals must start at 1, got 0")]
    ZeroOrdinal,
}

impl From<std::io::Error> for WorksheetError {
    fn from(error: std::io::Error) -> Self {
        WorksheetError::Io(Box::new(error))
    }
}
