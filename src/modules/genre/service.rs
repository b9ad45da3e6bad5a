use super::dto::GenreResponse;
use crate::common::error::CatalogError;
use crate::state::AppState;

pub struct GenreService;

impl GenreService {
    pub async fn find_all(state: AppState) -> Result<Vec<GenreResponse>, CatalogError> {
        let genres = state.catalog.load_genres().await?;

        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }
}
