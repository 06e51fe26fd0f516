use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum GatewayError {
    #[error("CSV error: {0}")]
    #[diagnostic(code(banktransfer::csv), help("settings files need an `option,value` header"))]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Order {0} not found")]
    OrderNotFound(u64),
    #[error("Startup task '{task}' failed: {reason}")]
    StartupError { task: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GatewayError>;
