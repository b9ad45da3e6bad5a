#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{Notify, watch};

use movies_feed::common::error::CatalogError;
use movies_feed::infrastructure::connectivity::monitor::ConnectivityMonitor;
use movies_feed::infrastructure::tmdb::client::CatalogClient;
use movies_feed::infrastructure::tmdb::payload::{
    ApiCountry, ApiGenres, ApiMovie, ApiMovieDetails, ApiMovies, ApiVideo, ApiVideos,
};
use movies_feed::modules::genre::model::Genre;
use movies_feed::modules::movie::repository::{CatalogRepository, RepositorySettings};

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

pub fn api_movie(id: i64, title: &str, rating: f64) -> ApiMovie {
    ApiMovie {
        id,
        title: title.to_string(),
        rating: Some(rating),
        votes: Some(100),
        release_date: Some("2020-01-01".to_string()),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        genre_ids: Some(vec![28]),
        video: Some(false),
    }
}

pub fn video(key: &str, kind: &str, site: &str, published_at: &str) -> ApiVideo {
    ApiVideo {
        published_at: published_at.to_string(),
        site: site.to_string(),
        kind: kind.to_string(),
        key: key.to_string(),
    }
}

/// Scripted in-memory catalog that records every call it receives.
pub struct FakeCatalog {
    monitor: ConnectivityMonitor,
    popular: Mutex<HashMap<u32, Vec<ApiMovie>>>,
    search_pages: Mutex<HashMap<u32, Vec<ApiMovie>>>,
    search_total_pages: Mutex<u32>,
    details: Mutex<Option<ApiMovieDetails>>,
    videos: Mutex<Vec<ApiVideo>>,
    genres: Vec<Genre>,
    failure: Mutex<Option<CatalogError>>,
    calls: Mutex<Vec<String>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            monitor: ConnectivityMonitor::new(true),
            popular: Mutex::new(HashMap::new()),
            search_pages: Mutex::new(HashMap::new()),
            search_total_pages: Mutex::new(1),
            details: Mutex::new(None),
            videos: Mutex::new(Vec::new()),
            genres: vec![
                Genre { id: 28, name: "Action".into() },
                Genre { id: 18, name: "Drama".into() },
            ],
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
        }
    }

    pub fn with_popular_page(self, page: u32, movies: Vec<ApiMovie>) -> Self {
        self.popular.lock().unwrap().insert(page, movies);
        self
    }

    pub fn with_search_page(self, page: u32, movies: Vec<ApiMovie>) -> Self {
        self.search_pages.lock().unwrap().insert(page, movies);
        self
    }

    pub fn with_search_total_pages(self, total: u32) -> Self {
        *self.search_total_pages.lock().unwrap() = total;
        self
    }

    pub fn with_videos(self, videos: Vec<ApiVideo>) -> Self {
        *self.videos.lock().unwrap() = videos;
        self
    }

    pub fn with_details(self, id: i64, title: &str) -> Self {
        *self.details.lock().unwrap() = Some(ApiMovieDetails {
            id,
            title: title.to_string(),
            release_date: Some("1995-12-15".to_string()),
            production_countries: vec![ApiCountry { name: "United States of America".into() }],
            genres: vec![Genre { id: 80, name: "Crime".into() }],
            overview: "A group of professional bank robbers.".to_string(),
            rating: 7.9,
            votes: 7000,
            video: false,
            poster_path: Some("/heat.jpg".to_string()),
            backdrop_path: None,
        });
        self
    }

    pub fn set_popular_page(&self, page: u32, movies: Vec<ApiMovie>) {
        self.popular.lock().unwrap().insert(page, movies);
    }

    pub fn set_connected(&self, connected: bool) {
        self.monitor.set_connected(connected);
    }

    pub fn fail_with(&self, error: Option<CatalogError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Makes `get_popular` wait until the returned handle is notified.
    pub fn hold_popular(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) -> Result<(), CatalogError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn get_popular(&self, page: u32) -> Result<ApiMovies, CatalogError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.record(format!("popular:{page}"))?;
        let movies = self.popular.lock().unwrap().get(&page).cloned().unwrap_or_default();
        Ok(ApiMovies { movies, total_pages: 10 })
    }

    async fn search(&self, query: &str, page: u32) -> Result<ApiMovies, CatalogError> {
        self.record(format!("search:{query}:{page}"))?;
        let movies = self.search_pages.lock().unwrap().get(&page).cloned().unwrap_or_default();
        Ok(ApiMovies {
            movies,
            total_pages: *self.search_total_pages.lock().unwrap(),
        })
    }

    async fn get_details(&self, movie_id: i64) -> Result<ApiMovieDetails, CatalogError> {
        self.record(format!("details:{movie_id}"))?;
        self.details.lock().unwrap().clone().ok_or(CatalogError::NoData)
    }

    async fn get_videos(&self, movie_id: i64) -> Result<ApiVideos, CatalogError> {
        self.record(format!("videos:{movie_id}"))?;
        Ok(ApiVideos {
            results: self.videos.lock().unwrap().clone(),
        })
    }

    async fn get_genres(&self) -> Result<ApiGenres, CatalogError> {
        self.record("genres".to_string())?;
        Ok(ApiGenres {
            genres: self.genres.clone(),
        })
    }

    fn connectivity(&self) -> watch::Receiver<bool> {
        self.monitor.subscribe()
    }
}

pub fn repository(fake: &Arc<FakeCatalog>) -> CatalogRepository {
    let client: Arc<dyn CatalogClient> = fake.clone();
    CatalogRepository::new(
        client,
        RepositorySettings {
            video_embed_base_url: EMBED_BASE.to_string(),
            search_page_cap: 5,
        },
    )
}

pub fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    items.iter().map(id).collect()
}
