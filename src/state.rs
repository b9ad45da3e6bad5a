use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::modules::feed::controller::FeedController;
use crate::modules::movie::repository::CatalogRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: CatalogRepository,
    pub feed: Arc<FeedController>,
}

impl AppState {
    /// The feed shares the repository, and with it the session cache.
    pub fn new(config: AppConfig, catalog: CatalogRepository) -> Self {
        let feed = Arc::new(FeedController::new(catalog.clone()));
        Self {
            config,
            catalog,
            feed,
        }
    }
}
