use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod cache;
pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod trailer;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/popular", get(handler::list_popular))
        .route("/cached", get(handler::list_cached))
        .route("/search", get(handler::search_movies))
        .route("/{id}", get(handler::get_movie))
        .route("/{id}/trailer", get(handler::get_trailer))
        .route("/{id}/image", get(handler::get_image))
}
