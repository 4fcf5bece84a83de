// errors.rs
use crate::api::ApiError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, malformed requests, etc.) or downstream layers (API, spreadsheets).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Upstream API Error: {0}")]
    Api(#[from] ApiError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Api(_) => 502,
            ServerError::XlsxError(_) | ServerError::Config(_) | ServerError::InternalError => 500,
        }
    }
}
