use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failure kinds surfaced by the catalog client and everything built on it.
///
/// Payload-carrying variants hold the rendered cause rather than the source
/// error so that the value can be cloned into feed snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CatalogError {
    #[error("No internet connection")]
    NoConnection,

    #[error("No data received from the catalog")]
    NoData,

    #[error("Catalog rejected the request credentials")]
    Unauthorized,

    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to decode catalog response: {0}")]
    DecodingFailed(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::NoConnection => "no_connection",
            CatalogError::NoData => "no_data",
            CatalogError::Unauthorized => "unauthorized",
            CatalogError::RequestFailed(_) => "request_failed",
            CatalogError::DecodingFailed(_) => "decoding_failed",
            CatalogError::InvalidUrl(_) => "invalid_url",
        }
    }

    /// Message shown to the end user for this kind of failure.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::NoConnection => {
                "You appear to be offline. Showing movies loaded earlier.".to_string()
            }
            CatalogError::NoData => "Nothing was found for this request.".to_string(),
            CatalogError::Unauthorized => "Access to the movie catalog was denied.".to_string(),
            CatalogError::RequestFailed(cause) => format!("Request failed: {cause}"),
            CatalogError::DecodingFailed(cause) => {
                format!("Received an unexpected response: {cause}")
            }
            CatalogError::InvalidUrl(_) => "The catalog address is invalid.".to_string(),
        }
    }

    /// Status the HTTP layer answers with when this error reaches a handler.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NoConnection => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::NoData => StatusCode::NOT_FOUND,
            CatalogError::Unauthorized
            | CatalogError::RequestFailed(_)
            | CatalogError::DecodingFailed(_) => StatusCode::BAD_GATEWAY,
            CatalogError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error as exposed in response payloads.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

impl From<&CatalogError> for ErrorBody {
    fn from(err: &CatalogError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.user_message(),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            CatalogError::NoConnection
        } else if err.is_decode() {
            CatalogError::DecodingFailed(err.to_string())
        } else if err.is_builder() {
            CatalogError::InvalidUrl(err.to_string())
        } else {
            CatalogError::RequestFailed(err.to_string())
        }
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DecodingFailed(err.to_string())
    }
}
