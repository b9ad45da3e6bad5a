use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::model::{ImageKind, ImageSize, Movie, MovieDetails, RatingTier};
use super::service::MovieDetailsView;
use crate::common::error::ErrorBody;
use crate::modules::genre::dto::GenreResponse;

// --- QUERIES ---

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopularQuery {
    #[validate(range(min = 1, max = 500, message = "Page must be between 1 and 500"))]
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    #[validate(length(max = 200, message = "Query must be at most 200 characters"))]
    pub query: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailsQuery {
    /// Title shown while details are loading or unavailable.
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageQuery {
    pub kind: Option<ImageKind>,
    pub size: Option<ImageSize>,
}

// --- RESPONSES ---

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub rating: f64,
    pub rating_tier: RatingTier,
    pub votes: u32,
    pub year: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub genres: Vec<GenreResponse>,
    pub has_video: bool,
}

impl MovieResponse {
    pub fn from_movie(movie: Movie, image_base: &str) -> Self {
        Self {
            poster_url: movie.image_url(image_base, ImageKind::Poster, ImageSize::Small),
            backdrop_url: movie.image_url(image_base, ImageKind::Backdrop, ImageSize::Small),
            rating_tier: RatingTier::from_rating(movie.rating),
            id: movie.id,
            title: movie.title,
            rating: movie.rating,
            votes: movie.votes,
            year: movie.year,
            genres: movie.genres.into_iter().map(GenreResponse::from).collect(),
            has_video: movie.has_video,
        }
    }

    pub fn list(movies: Vec<Movie>, image_base: &str) -> Vec<Self> {
        movies
            .into_iter()
            .map(|m| Self::from_movie(m, image_base))
            .collect()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDetailsResponse {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub countries: Vec<String>,
    pub genres: Vec<GenreResponse>,
    pub rating: f64,
    pub rating_tier: RatingTier,
    pub votes: u32,
    pub year: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub has_video: bool,
}

impl MovieDetailsResponse {
    pub fn from_details(details: MovieDetails, image_base: &str) -> Self {
        Self {
            poster_url: details.image_url(image_base, ImageKind::Poster, ImageSize::Medium),
            backdrop_url: details.image_url(image_base, ImageKind::Backdrop, ImageSize::Medium),
            rating_tier: RatingTier::from_rating(details.rating),
            id: details.id,
            title: details.title,
            overview: details.overview,
            countries: details.countries,
            genres: details.genres.into_iter().map(GenreResponse::from).collect(),
            rating: details.rating,
            votes: details.votes,
            year: details.year,
            has_video: details.has_video,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDetailsViewResponse {
    pub movie_title: String,
    pub details: Option<MovieDetailsResponse>,
    pub trailer_url: Option<String>,
    pub error: Option<ErrorBody>,
}

impl MovieDetailsViewResponse {
    pub fn from_view(view: MovieDetailsView, image_base: &str) -> Self {
        Self {
            error: view.error.as_ref().map(ErrorBody::from),
            movie_title: view.movie_title,
            details: view
                .details
                .map(|d| MovieDetailsResponse::from_details(d, image_base)),
            trailer_url: view.trailer_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrailerResponse {
    pub movie_id: i64,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageResponse {
    pub movie_id: i64,
    pub kind: ImageKind,
    pub size: ImageSize,
    pub url: Option<String>,
}
