use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use tracing::{debug, info};

use super::cache::LocalCache;
use super::model::{Movie, MovieDetails};
use super::trailer;
use crate::common::error::CatalogError;
use crate::config::settings::{DEFAULT_SEARCH_PAGE_CAP, DEFAULT_VIDEO_EMBED_BASE_URL};
use crate::infrastructure::tmdb::client::CatalogClient;
use crate::modules::genre::model::Genre;

#[derive(Debug, Clone)]
pub struct RepositorySettings {
    pub video_embed_base_url: String,
    pub search_page_cap: u32,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            video_embed_base_url: DEFAULT_VIDEO_EMBED_BASE_URL.to_string(),
            search_page_cap: DEFAULT_SEARCH_PAGE_CAP,
        }
    }
}

/// Single source of truth for movie data.
///
/// Online reads go to the catalog and feed the session cache; offline reads
/// are answered from the cache alone. Only the pushed connectivity flag
/// picks the path, a failing request is reported as-is.
#[derive(Clone)]
pub struct CatalogRepository {
    client: Arc<dyn CatalogClient>,
    cache: Arc<RwLock<LocalCache>>,
    connectivity: watch::Receiver<bool>,
    settings: RepositorySettings,
}

impl CatalogRepository {
    pub fn new(client: Arc<dyn CatalogClient>, settings: RepositorySettings) -> Self {
        let connectivity = client.connectivity();
        Self {
            client,
            cache: Arc::new(RwLock::new(LocalCache::new())),
            connectivity,
            settings,
        }
    }

    pub fn is_connected(&self) -> bool {
        *self.connectivity.borrow()
    }

    pub fn connectivity(&self) -> watch::Receiver<bool> {
        self.connectivity.clone()
    }

    // --- POPULAR ---

    pub async fn load_popular(&self, page: u32) -> Result<Vec<Movie>, CatalogError> {
        if !self.is_connected() {
            let cached = self.cache.read().await.snapshot();
            info!(page, cached = cached.len(), "offline, answering popular feed from cache");
            return Ok(cached);
        }

        let response = self.client.get_popular(page).await?;
        let genres = self.client.get_genres().await?.genres;
        let movies: Vec<Movie> = response
            .movies
            .into_iter()
            .map(|api| Movie::from_api(api, &genres))
            .collect();

        let added = self.cache.write().await.append_new(&movies);
        debug!(page, fetched = movies.len(), added, "popular page loaded");
        Ok(movies)
    }

    pub async fn load_cached_popular(&self) -> Vec<Movie> {
        self.cache.read().await.snapshot()
    }

    // --- SEARCH ---

    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        if !self.is_connected() {
            let hits = self.cache.read().await.filter_by_title(query);
            info!(query, hits = hits.len(), "offline, searching cached titles");
            return Ok(hits);
        }

        // The first page also tells how many pages exist
        let first = self.client.search(query, 1).await?;
        let last_page = first.total_pages.min(self.settings.search_page_cap).max(1);
        let genres = self.client.get_genres().await?.genres;

        let mut raw = first.movies;
        for page in 2..=last_page {
            let next = self.client.search(query, page).await?;
            raw.extend(next.movies);
        }

        debug!(query, pages = last_page, results = raw.len(), "search finished");
        Ok(raw
            .into_iter()
            .map(|api| Movie::from_api(api, &genres))
            .collect())
    }

    // --- DETAILS ---

    pub async fn load_movie_details(&self, movie_id: i64) -> Result<MovieDetails, CatalogError> {
        let details = self.client.get_details(movie_id).await?;
        Ok(MovieDetails::from(details))
    }

    pub async fn load_latest_trailer_url(&self, movie_id: i64) -> Result<Option<String>, CatalogError> {
        let videos = self.client.get_videos(movie_id).await?;
        let url = trailer::latest_trailer(&videos.results)
            .map(|v| trailer::embed_url(&self.settings.video_embed_base_url, &v.key));
        debug!(movie_id, candidates = videos.results.len(), found = url.is_some(), "trailer lookup");
        Ok(url)
    }

    // --- GENRES ---

    pub async fn load_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        Ok(self.client.get_genres().await?.genres)
    }
}
