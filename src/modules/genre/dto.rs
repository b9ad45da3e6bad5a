use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::genre::model::Genre;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}
