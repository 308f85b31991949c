use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Errors that can occur during external service communication
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Service unreachable or timeout
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Invalid response format from external service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Authentication error (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// Rate limited or exceeded quota
    #[error("Rate limited: {0}")]
    RateLimited(String),
    /// The stream broke off after it had started
    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),
}

impl ConnectorError {
    /// Map a non-success upstream status to an error, keeping the body for the logs.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let msg = format!("HTTP {} - {}", status, body);
        match status.as_u16() {
            401 | 403 => Self::Unauthorized(msg),
            429 => Self::RateLimited(msg),
            502..=504 => Self::ServiceUnavailable(msg),
            _ => Self::HttpError(msg),
        }
    }
}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::HttpError(_) => "External service error",
            Self::ServiceUnavailable(_) => "Service unavailable",
            Self::InvalidResponse(_) => "Invalid external service response",
            Self::Unauthorized(_) => "Unauthorized",
            Self::RateLimited(_) => "Rate limit exceeded",
            Self::StreamInterrupted(_) => "External service stream interrupted",
        };

        HttpResponse::build(self.status_code()).json(json!({
            "message": message,
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::StreamInterrupted(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
