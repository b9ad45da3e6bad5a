use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog-wide genre record. Immutable for the lifetime of a session.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq, Hash)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Wire shape of `genre/movie/list`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiGenres {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Genre {
    /// Genres from `catalog` whose id appears in `ids`, in catalog order.
    pub fn intersect(catalog: &[Genre], ids: &[i64]) -> Vec<Genre> {
        catalog
            .iter()
            .filter(|g| ids.contains(&g.id))
            .cloned()
            .collect()
    }
}
