//! Wire shapes returned by the catalog API, decoded as-is.

use serde::{Deserialize, Serialize};

pub use crate::modules::genre::model::ApiGenres;
use crate::modules::genre::model::Genre;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiMovie {
    pub id: i64,
    pub title: String,
    #[serde(default, rename = "vote_average")]
    pub rating: Option<f64>,
    #[serde(default, rename = "vote_count")]
    pub votes: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub video: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiMovies {
    #[serde(default, rename = "results")]
    pub movies: Vec<ApiMovie>,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCountry {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMovieDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub production_countries: Vec<ApiCountry>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: String,
    #[serde(default, rename = "vote_average")]
    pub rating: f64,
    #[serde(default, rename = "vote_count")]
    pub votes: u32,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiVideo {
    pub published_at: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiVideos {
    #[serde(default)]
    pub results: Vec<ApiVideo>,
}
