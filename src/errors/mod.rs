use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    // Extraction errors
    #[error("Invalid selector for {source_tag}: {message}")]
    Selector { source_tag: String, message: String },

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Output errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShopResult<T> = Result<T, ShopError>;
