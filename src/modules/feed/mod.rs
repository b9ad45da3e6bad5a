use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod controller;
pub mod dto;
pub mod handler;
pub mod state;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_feed))
        .route("/load", post(handler::load_feed))
        .route("/more", post(handler::load_more))
        .route("/refresh", post(handler::refresh_feed))
        .route("/search", post(handler::search_feed))
        .route("/sort", post(handler::sort_feed))
        .route("/sort-options", get(handler::list_sort_options))
}
