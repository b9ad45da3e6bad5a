use tracing::warn;

use super::model::MovieDetails;
use super::repository::CatalogRepository;
use crate::common::error::CatalogError;

/// Everything the detail screen shows for one movie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieDetailsView {
    pub movie_title: String,
    pub details: Option<MovieDetails>,
    pub trailer_url: Option<String>,
    pub error: Option<CatalogError>,
}

pub struct MovieService;

impl MovieService {
    /// Loads details, then the latest trailer. A failing step is recorded in
    /// `error` and does not discard what the other step produced.
    pub async fn load_details_view(
        repo: &CatalogRepository,
        movie_id: i64,
        movie_title: &str,
    ) -> MovieDetailsView {
        let mut view = MovieDetailsView {
            movie_title: movie_title.to_string(),
            ..Default::default()
        };

        match repo.load_movie_details(movie_id).await {
            Ok(details) => {
                if view.movie_title.is_empty() {
                    view.movie_title = details.title.clone();
                }
                view.details = Some(details);
            }
            Err(e) => {
                warn!(movie_id, error = %e, "details unavailable");
                view.error = Some(e);
            }
        }

        match repo.load_latest_trailer_url(movie_id).await {
            Ok(url) => view.trailer_url = url,
            Err(e) => {
                warn!(movie_id, error = %e, "trailer lookup failed");
                view.error = Some(e);
            }
        }

        view
    }
}
