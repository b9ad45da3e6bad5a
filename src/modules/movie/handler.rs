use super::dto::*;
use super::model::{ImageKind, ImageSize};
use super::service::MovieService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

/// One page of the popular feed, or the whole cache when offline
#[utoipa::path(
    get,
    path = "/api/v1/movies/popular",
    params(PopularQuery),
    responses(
        (status = 200, description = "Popular movies", body = ApiResponse<Vec<MovieResponse>>),
        (status = 400, description = "Bad Request"),
        (status = 502, description = "Catalog error")
    ),
    tag = "Movies"
)]
pub async fn list_popular(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query.validate()?;
    let movies = state.catalog.load_popular(query.page.unwrap_or(1)).await?;
    let body = MovieResponse::list(movies, &state.config.image_base_url);
    Ok(ApiSuccess(ApiResponse::success(body, "Movies retrieved successfully"), StatusCode::OK))
}

/// Every movie seen this session, in fetch order
#[utoipa::path(
    get,
    path = "/api/v1/movies/cached",
    responses(
        (status = 200, description = "Cached movies", body = ApiResponse<Vec<MovieResponse>>)
    ),
    tag = "Movies"
)]
pub async fn list_cached(State(state): State<AppState>) -> impl IntoResponse {
    let movies = state.catalog.load_cached_popular().await;
    let body = MovieResponse::list(movies, &state.config.image_base_url);
    ApiSuccess(ApiResponse::success(body, "Cached movies retrieved"), StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = ApiResponse<Vec<MovieResponse>>),
        (status = 400, description = "Bad Request"),
        (status = 502, description = "Catalog error")
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query.validate()?;
    let term = query.query.trim();
    let movies = if term.is_empty() {
        state.catalog.load_popular(1).await?
    } else {
        state.catalog.search_movies(term).await?
    };
    let body = MovieResponse::list(movies, &state.config.image_base_url);
    Ok(ApiSuccess(ApiResponse::success(body, "Search completed"), StatusCode::OK))
}

/// Details screen: details plus latest trailer, with per-step errors
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Catalog movie ID"),
        DetailsQuery
    ),
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieDetailsViewResponse>)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<DetailsQuery>,
) -> impl IntoResponse {
    let title = query.title.unwrap_or_default();
    let view = MovieService::load_details_view(&state.catalog, id, &title).await;
    let body = MovieDetailsViewResponse::from_view(view, &state.config.image_base_url);
    ApiSuccess(ApiResponse::success(body, "Movie retrieved successfully"), StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}/trailer",
    params(
        ("id" = i64, Path, description = "Catalog movie ID")
    ),
    responses(
        (status = 200, description = "Latest trailer URL, null when none", body = ApiResponse<TrailerResponse>),
        (status = 404, description = "Movie not found"),
        (status = 503, description = "Offline")
    ),
    tag = "Movies"
)]
pub async fn get_trailer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let url = state.catalog.load_latest_trailer_url(id).await?;
    let body = TrailerResponse { movie_id: id, url };
    Ok(ApiSuccess(ApiResponse::success(body, "Trailer lookup completed"), StatusCode::OK))
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}/image",
    params(
        ("id" = i64, Path, description = "Catalog movie ID"),
        ImageQuery
    ),
    responses(
        (status = 200, description = "Poster or backdrop URL", body = ApiResponse<ImageResponse>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ImageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = query.kind.unwrap_or(ImageKind::Poster);
    let size = query.size.unwrap_or(ImageSize::Original);
    let details = state.catalog.load_movie_details(id).await?;
    let body = ImageResponse {
        movie_id: id,
        kind,
        size,
        url: details.image_url(&state.config.image_base_url, kind, size),
    };
    Ok(ApiSuccess(ApiResponse::success(body, "Image resolved"), StatusCode::OK))
}
