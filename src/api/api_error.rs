use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Could not read API response: {0}")]
    Parse(String),
    #[error("Bad endpoint: {0}")]
    Endpoint(String),
}

impl ApiError {
    /// Sentence shown inline on the page that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "The listings service could not be reached. Please try again.".to_string()
            }
            ApiError::Status { status, body } if body.trim().is_empty() => {
                format!("The server answered with status {status}.")
            }
            ApiError::Status { status, body } => {
                format!("The server answered with status {status}: {}", body.trim())
            }
            ApiError::Parse(_) => "The server sent a response we could not understand.".to_string(),
            ApiError::Endpoint(_) => "The site is misconfigured.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
