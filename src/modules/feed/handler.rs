use super::dto::{FeedResponse, FeedSearchRequest, FeedSortRequest, SortOptionResponse};
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::movie::model::SortOption;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

const BUSY: &str = "Another feed operation is still running";

fn feed_snapshot(state: &AppState, message: &str) -> ApiSuccess<ApiResponse<FeedResponse>> {
    let body = FeedResponse::from_state(state.feed.snapshot(), &state.config.image_base_url);
    ApiSuccess(ApiResponse::success(body, message), StatusCode::OK)
}

/// Current feed snapshot
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    responses(
        (status = 200, description = "Feed state", body = ApiResponse<FeedResponse>)
    ),
    tag = "Feed"
)]
pub async fn get_feed(State(state): State<AppState>) -> impl IntoResponse {
    feed_snapshot(&state, "Feed retrieved")
}

/// First load of the popular feed
#[utoipa::path(
    post,
    path = "/api/v1/feed/load",
    responses(
        (status = 200, description = "Feed loaded", body = ApiResponse<FeedResponse>),
        (status = 409, description = "Feed busy")
    ),
    tag = "Feed"
)]
pub async fn load_feed(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.feed.load_initial().await {
        return Err(ApiError::conflict(BUSY));
    }
    Ok(feed_snapshot(&state, "Feed loaded"))
}

#[utoipa::path(
    post,
    path = "/api/v1/feed/more",
    responses(
        (status = 200, description = "Next page merged", body = ApiResponse<FeedResponse>),
        (status = 409, description = "Feed busy")
    ),
    tag = "Feed"
)]
pub async fn load_more(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.feed.load_more().await {
        return Err(ApiError::conflict(BUSY));
    }
    Ok(feed_snapshot(&state, "Next page loaded"))
}

#[utoipa::path(
    post,
    path = "/api/v1/feed/refresh",
    responses(
        (status = 200, description = "Feed reset and reloaded", body = ApiResponse<FeedResponse>),
        (status = 409, description = "Feed busy")
    ),
    tag = "Feed"
)]
pub async fn refresh_feed(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.feed.refresh().await {
        return Err(ApiError::conflict(BUSY));
    }
    Ok(feed_snapshot(&state, "Feed refreshed"))
}

#[utoipa::path(
    post,
    path = "/api/v1/feed/search",
    request_body = FeedSearchRequest,
    responses(
        (status = 200, description = "Search applied", body = ApiResponse<FeedResponse>),
        (status = 400, description = "Bad Request"),
        (status = 409, description = "Feed busy")
    ),
    tag = "Feed"
)]
pub async fn search_feed(
    State(state): State<AppState>,
    Json(payload): Json<FeedSearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    if !state.feed.search(&payload.query).await {
        return Err(ApiError::conflict(BUSY));
    }
    Ok(feed_snapshot(&state, "Search applied"))
}

#[utoipa::path(
    post,
    path = "/api/v1/feed/sort",
    request_body = FeedSortRequest,
    responses(
        (status = 200, description = "Sort applied", body = ApiResponse<FeedResponse>),
        (status = 409, description = "Sorting unavailable while searching or loading")
    ),
    tag = "Feed"
)]
pub async fn sort_feed(
    State(state): State<AppState>,
    Json(payload): Json<FeedSortRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.feed.apply_sort(payload.option).await {
        return Err(ApiError::conflict("Sorting is unavailable right now"));
    }
    Ok(feed_snapshot(&state, "Sort applied"))
}

#[utoipa::path(
    get,
    path = "/api/v1/feed/sort-options",
    responses(
        (status = 200, description = "Available sort options", body = ApiResponse<Vec<SortOptionResponse>>)
    ),
    tag = "Feed"
)]
pub async fn list_sort_options() -> impl IntoResponse {
    let options: Vec<SortOptionResponse> = SortOption::ALL.into_iter().map(Into::into).collect();
    ApiSuccess(ApiResponse::success(options, "Sort options"), StatusCode::OK)
}
