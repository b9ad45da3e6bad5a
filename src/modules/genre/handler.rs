use super::dto::GenreResponse;
use super::service::GenreService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// List the catalog's movie genres
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<GenreResponse>>),
        (status = 502, description = "Catalog error"),
        (status = 503, description = "Offline")
    ),
    tag = "Movies"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::find_all(state).await {
        Ok(genres) => ApiSuccess(
            ApiResponse::success(genres, "Genres retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
