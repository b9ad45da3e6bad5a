use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_VIDEO_EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";
pub const DEFAULT_SEARCH_PAGE_CAP: u32 = 5;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    pub image_base_url: String,
    pub video_embed_base_url: String,
    pub language: String,
    pub search_page_cap: u32,
    pub connectivity_probe_secs: u64,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            tmdb_api_key: env::get(EnvKey::TmdbApiKey)?,
            tmdb_base_url: env::get_or(EnvKey::TmdbBaseUrl, DEFAULT_TMDB_BASE_URL),
            image_base_url: env::get_or(EnvKey::TmdbImageBaseUrl, DEFAULT_IMAGE_BASE_URL),
            video_embed_base_url: env::get_or(
                EnvKey::VideoEmbedBaseUrl,
                DEFAULT_VIDEO_EMBED_BASE_URL,
            ),
            language: env::get_or(EnvKey::TmdbLanguage, "en"),
            // A cap of zero would make every search empty
            search_page_cap: env::get_parsed(EnvKey::SearchPageCap, DEFAULT_SEARCH_PAGE_CAP).max(1),
            connectivity_probe_secs: env::get_parsed(EnvKey::ConnectivityProbeSecs, 15),
            request_timeout_secs: env::get_parsed(EnvKey::RequestTimeoutSecs, 30),
        })
    }
}
