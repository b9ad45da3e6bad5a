use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use url::Url;

use super::endpoint::MoviesEndpoint;
use super::payload::{ApiGenres, ApiMovieDetails, ApiMovies, ApiVideos};
use crate::common::error::CatalogError;
use crate::config::settings::AppConfig;
use crate::infrastructure::connectivity::monitor::ConnectivityMonitor;

/// Remote movie catalog as seen by the repository.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn get_popular(&self, page: u32) -> Result<ApiMovies, CatalogError>;

    async fn search(&self, query: &str, page: u32) -> Result<ApiMovies, CatalogError>;

    async fn get_details(&self, movie_id: i64) -> Result<ApiMovieDetails, CatalogError>;

    async fn get_videos(&self, movie_id: i64) -> Result<ApiVideos, CatalogError>;

    async fn get_genres(&self) -> Result<ApiGenres, CatalogError>;

    /// Latest known reachability of the catalog, pushed by its listener.
    fn connectivity(&self) -> watch::Receiver<bool>;
}

/// Maps a non-success HTTP status to the matching error kind.
pub fn error_for_status(status: StatusCode) -> Option<CatalogError> {
    match status.as_u16() {
        200..=299 => None,
        401 | 403 => Some(CatalogError::Unauthorized),
        404 => Some(CatalogError::NoData),
        code => Some(CatalogError::RequestFailed(format!("HTTP {code}"))),
    }
}

#[derive(Clone, Debug)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    language: String,
    connectivity: ConnectivityMonitor,
}

impl TmdbClient {
    pub fn new(config: &AppConfig, connectivity: ConnectivityMonitor) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        // `Url::join` drops the last segment unless the base ends with a slash
        let mut base = config.tmdb_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        info!("✅ Catalog client ready for {}", base_url);
        Ok(Self {
            http,
            base_url,
            api_key: config.tmdb_api_key.clone(),
            language: config.language.clone(),
            connectivity,
        })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &MoviesEndpoint) -> Result<Url, CatalogError> {
        let mut url = self.base_url.join(&endpoint.path())?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            query.append_pair("language", &self.language);
            for (name, value) in endpoint.params() {
                query.append_pair(name, &value);
            }
        }
        Ok(url)
    }

    async fn request<T: DeserializeOwned>(&self, endpoint: MoviesEndpoint) -> Result<T, CatalogError> {
        if !self.connectivity.is_connected() {
            return Err(CatalogError::NoConnection);
        }

        let url = self.endpoint_url(&endpoint)?;
        let path = endpoint.path();
        debug!(%path, "catalog request");

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let err = CatalogError::from(e);
                if err == CatalogError::NoConnection {
                    self.connectivity.set_connected(false);
                }
                warn!(%path, error = %err, "catalog request failed");
                return Err(err);
            }
        };

        if let Some(err) = error_for_status(response.status()) {
            warn!(%path, status = %response.status(), "catalog answered with an error");
            return Err(err);
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(CatalogError::from)
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn get_popular(&self, page: u32) -> Result<ApiMovies, CatalogError> {
        self.request(MoviesEndpoint::Popular { page }).await
    }

    async fn search(&self, query: &str, page: u32) -> Result<ApiMovies, CatalogError> {
        self.request(MoviesEndpoint::Search {
            query: query.to_string(),
            page,
        })
        .await
    }

    async fn get_details(&self, movie_id: i64) -> Result<ApiMovieDetails, CatalogError> {
        self.request(MoviesEndpoint::Details { movie_id }).await
    }

    async fn get_videos(&self, movie_id: i64) -> Result<ApiVideos, CatalogError> {
        self.request(MoviesEndpoint::Videos { movie_id }).await
    }

    async fn get_genres(&self) -> Result<ApiGenres, CatalogError> {
        self.request(MoviesEndpoint::Genres).await
    }

    fn connectivity(&self) -> watch::Receiver<bool> {
        self.connectivity.subscribe()
    }
}
