use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),

    // Schema validation errors
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Schema compilation failed: {0}")]
    SchemaCompilation(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

pub type BenchResult<T> = Result<T, BenchError>;

impl From<std::string::FromUtf8Error> for BenchError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        BenchError::Encoding(err.to_string())
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(err: toml::de::Error) -> Self {
        BenchError::InvalidConfig(err.to_string())
    }
}
