use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::state::{FeedState, LoadingPhase, UserFlow};
use crate::common::error::ErrorBody;
use crate::modules::movie::dto::MovieResponse;
use crate::modules::movie::model::SortOption;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FeedSearchRequest {
    #[validate(length(max = 200, message = "Query must be at most 200 characters"))]
    pub query: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedSortRequest {
    pub option: SortOption,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedResponse {
    pub movies: Vec<MovieResponse>,
    pub current_page: u32,
    pub sort_option: SortOption,
    pub sort_enabled: bool,
    pub search_text: Option<String>,
    pub loading: LoadingPhase,
    pub user_flow: UserFlow,
    pub is_network_connected: bool,
    pub error: Option<ErrorBody>,
}

impl FeedResponse {
    pub fn from_state(state: FeedState, image_base: &str) -> Self {
        Self {
            sort_enabled: state.is_sort_enabled(),
            error: state.error.as_ref().map(ErrorBody::from),
            movies: MovieResponse::list(state.movies, image_base),
            current_page: state.current_page,
            sort_option: state.sort_option,
            search_text: state.search_text,
            loading: state.loading,
            user_flow: state.user_flow,
            is_network_connected: state.is_network_connected,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SortOptionResponse {
    pub option: SortOption,
    pub title: String,
}

impl From<SortOption> for SortOptionResponse {
    fn from(option: SortOption) -> Self {
        Self {
            option,
            title: option.title().to_string(),
        }
    }
}
