use serde::Serialize;
use utoipa::ToSchema;

use crate::common::error::CatalogError;
use crate::modules::movie::model::{Movie, SortOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoadingPhase {
    #[default]
    None,
    Initial,
    Pagination,
    Searching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserFlow {
    #[default]
    Browsing,
    Searching,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub movies: Vec<Movie>,
    pub current_page: u32,
    pub sort_option: SortOption,
    pub search_text: Option<String>,
    pub loading: LoadingPhase,
    pub user_flow: UserFlow,
    pub is_network_connected: bool,
    pub error: Option<CatalogError>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            current_page: 1,
            sort_option: SortOption::Default,
            search_text: None,
            loading: LoadingPhase::None,
            user_flow: UserFlow::Browsing,
            is_network_connected: false,
            error: None,
        }
    }
}

/// One field assignment on [`FeedState`].
#[derive(Debug, Clone)]
pub enum FeedAction {
    SetMovies(Vec<Movie>),
    SetPage(u32),
    SetSortOption(SortOption),
    SetSearchText(Option<String>),
    SetLoading(LoadingPhase),
    SetUserFlow(UserFlow),
    SetNetworkConnected(bool),
    SetError(Option<CatalogError>),
}

impl FeedState {
    pub fn reduce(mut self, action: FeedAction) -> FeedState {
        match action {
            FeedAction::SetMovies(movies) => self.movies = movies,
            FeedAction::SetPage(page) => self.current_page = page.max(1),
            FeedAction::SetSortOption(option) => self.sort_option = option,
            FeedAction::SetSearchText(text) => self.search_text = text,
            FeedAction::SetLoading(phase) => self.loading = phase,
            FeedAction::SetUserFlow(flow) => self.user_flow = flow,
            FeedAction::SetNetworkConnected(connected) => self.is_network_connected = connected,
            FeedAction::SetError(error) => self.error = error,
        }
        self
    }

    pub fn is_idle(&self) -> bool {
        self.loading == LoadingPhase::None
    }

    /// Sorting is only offered while browsing.
    pub fn is_sort_enabled(&self) -> bool {
        self.user_flow == UserFlow::Browsing
    }
}
