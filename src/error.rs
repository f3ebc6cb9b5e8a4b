use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutApiError {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, CheckoutApiError>;
