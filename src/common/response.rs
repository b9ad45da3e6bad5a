use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::error::CatalogError;

#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
    /// Machine-readable error kind, present on failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
            error_kind: None,
        }
    }

    pub fn error(message: &str, kind: Option<&str>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
            error_kind: kind.map(str::to_string),
        }
    }
}

pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<ApiResponse<T>>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (response, status) = (self.0, self.1);
        (status, Json(response)).into_response()
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
    pub kind: Option<&'static str>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
            kind: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::CONFLICT,
            kind: Some("busy"),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self {
            message: err.user_message(),
            status: err.status_code(),
            kind: Some(err.kind()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errs: validator::ValidationErrors) -> Self {
        Self {
            message: errs.to_string(),
            status: StatusCode::BAD_REQUEST,
            kind: Some("validation"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = ApiResponse::<()>::error(&self.message, self.kind);
        (self.status, Json(response)).into_response()
    }
}
