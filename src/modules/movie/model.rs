use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::infrastructure::tmdb::payload::{ApiMovie, ApiMovieDetails};
use crate::modules::genre::model::Genre;

const UNKNOWN_YEAR: &str = "N/A";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub rating: f64,
    pub votes: u32,
    pub year: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genres: Vec<Genre>,
    pub has_video: bool,
}

impl Movie {
    pub fn from_api(api: ApiMovie, genre_catalog: &[Genre]) -> Self {
        let genres = Genre::intersect(genre_catalog, api.genre_ids.as_deref().unwrap_or(&[]));
        Self {
            id: api.id,
            title: api.title,
            rating: api.rating.unwrap_or(0.0),
            votes: api.votes.unwrap_or(0),
            year: year_of(api.release_date.as_deref()),
            poster_path: api.poster_path,
            backdrop_path: api.backdrop_path,
            genres,
            has_video: api.video.unwrap_or(false),
        }
    }

    pub fn image_url(&self, image_base: &str, kind: ImageKind, size: ImageSize) -> Option<String> {
        let path = match kind {
            ImageKind::Poster => self.poster_path.as_deref(),
            ImageKind::Backdrop => self.backdrop_path.as_deref(),
        };
        path.map(|p| build_image_url(image_base, size, p))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub countries: Vec<String>,
    pub genres: Vec<Genre>,
    pub rating: f64,
    pub votes: u32,
    pub year: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub has_video: bool,
}

impl From<ApiMovieDetails> for MovieDetails {
    fn from(api: ApiMovieDetails) -> Self {
        Self {
            id: api.id,
            year: year_of(api.release_date.as_deref()),
            title: api.title,
            overview: api.overview,
            countries: api.production_countries.into_iter().map(|c| c.name).collect(),
            genres: api.genres,
            rating: api.rating,
            votes: api.votes,
            poster_path: api.poster_path,
            backdrop_path: api.backdrop_path,
            has_video: api.video,
        }
    }
}

impl MovieDetails {
    pub fn image_url(&self, image_base: &str, kind: ImageKind, size: ImageSize) -> Option<String> {
        let path = match kind {
            ImageKind::Poster => self.poster_path.as_deref(),
            ImageKind::Backdrop => self.backdrop_path.as_deref(),
        };
        path.map(|p| build_image_url(image_base, size, p))
    }
}

fn year_of(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => UNKNOWN_YEAR.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Poster,
    Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageSize {
    #[default]
    Small,
    Medium,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "w780",
            ImageSize::Medium => "w1280",
            ImageSize::Original => "original",
        }
    }
}

fn build_image_url(image_base: &str, size: ImageSize, path: &str) -> String {
    format!(
        "{}/{}/{}",
        image_base.trim_end_matches('/'),
        size.as_str(),
        path.trim_start_matches('/')
    )
}

/// Coarse bucket used to color rating badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Low,
    BelowMedium,
    Medium,
    High,
}

impl RatingTier {
    pub fn from_rating(rating: f64) -> Self {
        match rating {
            r if (0.0..2.5).contains(&r) => RatingTier::Low,
            r if (2.5..5.0).contains(&r) => RatingTier::BelowMedium,
            r if (5.0..7.5).contains(&r) => RatingTier::Medium,
            r if (7.5..=10.0).contains(&r) => RatingTier::High,
            _ => RatingTier::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    RatingAscending,
    RatingDescending,
    NameAscending,
    NameDescending,
    YearAscending,
    YearDescending,
    VotesAscending,
    VotesDescending,
    #[default]
    Default,
}

impl SortOption {
    pub const ALL: [SortOption; 9] = [
        SortOption::RatingAscending,
        SortOption::RatingDescending,
        SortOption::NameAscending,
        SortOption::NameDescending,
        SortOption::YearAscending,
        SortOption::YearDescending,
        SortOption::VotesAscending,
        SortOption::VotesDescending,
        SortOption::Default,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortOption::RatingAscending => "Rating: low to high",
            SortOption::RatingDescending => "Rating: high to low",
            SortOption::NameAscending => "Name: A to Z",
            SortOption::NameDescending => "Name: Z to A",
            SortOption::YearAscending => "Year: oldest first",
            SortOption::YearDescending => "Year: newest first",
            SortOption::VotesAscending => "Votes: fewest first",
            SortOption::VotesDescending => "Votes: most first",
            SortOption::Default => "Default",
        }
    }

    /// Stable in-place sort. `Default` leaves the slice untouched, restoring
    /// fetch order is the caller's job.
    pub fn sort(&self, movies: &mut [Movie]) {
        match self {
            SortOption::RatingAscending => movies.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
            SortOption::RatingDescending => movies.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::NameAscending => movies.sort_by(|a, b| a.title.cmp(&b.title)),
            SortOption::NameDescending => movies.sort_by(|a, b| b.title.cmp(&a.title)),
            SortOption::YearAscending => movies.sort_by(|a, b| a.year.cmp(&b.year)),
            SortOption::YearDescending => movies.sort_by(|a, b| b.year.cmp(&a.year)),
            SortOption::VotesAscending => movies.sort_by_key(|m| m.votes),
            SortOption::VotesDescending => movies.sort_by(|a, b| b.votes.cmp(&a.votes)),
            SortOption::Default => {}
        }
    }

    pub fn sorted(&self, mut movies: Vec<Movie>) -> Vec<Movie> {
        self.sort(&mut movies);
        movies
    }
}
