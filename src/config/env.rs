use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    TmdbApiKey,
    TmdbBaseUrl,
    TmdbImageBaseUrl,
    VideoEmbedBaseUrl,
    TmdbLanguage,
    SearchPageCap,
    ConnectivityProbeSecs,
    RequestTimeoutSecs,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::TmdbApiKey => "TMDB_API_KEY",
            EnvKey::TmdbBaseUrl => "TMDB_BASE_URL",
            EnvKey::TmdbImageBaseUrl => "TMDB_IMAGE_BASE_URL",
            EnvKey::VideoEmbedBaseUrl => "VIDEO_EMBED_BASE_URL",
            EnvKey::TmdbLanguage => "TMDB_LANGUAGE",
            EnvKey::SearchPageCap => "SEARCH_PAGE_CAP",
            EnvKey::ConnectivityProbeSecs => "CONNECTIVITY_PROBE_SECS",
            EnvKey::RequestTimeoutSecs => "REQUEST_TIMEOUT_SECS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
