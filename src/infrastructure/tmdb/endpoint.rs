/// Catalog routes consumed by the client, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoviesEndpoint {
    Popular { page: u32 },
    Search { query: String, page: u32 },
    Details { movie_id: i64 },
    Videos { movie_id: i64 },
    Genres,
}

impl MoviesEndpoint {
    pub fn path(&self) -> String {
        match self {
            MoviesEndpoint::Popular { .. } => "movie/popular".to_string(),
            MoviesEndpoint::Search { .. } => "search/movie".to_string(),
            MoviesEndpoint::Details { movie_id } => format!("movie/{movie_id}"),
            MoviesEndpoint::Videos { movie_id } => format!("movie/{movie_id}/videos"),
            MoviesEndpoint::Genres => "genre/movie/list".to_string(),
        }
    }

    /// Endpoint-specific query parameters, on top of the credentials every
    /// request carries.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            MoviesEndpoint::Popular { page } => vec![("page", page.to_string())],
            MoviesEndpoint::Search { query, page } => {
                vec![("query", query.clone()), ("page", page.to_string())]
            }
            MoviesEndpoint::Details { .. } | MoviesEndpoint::Videos { .. } | MoviesEndpoint::Genres => {
                vec![]
            }
        }
    }
}
