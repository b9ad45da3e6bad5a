use std::collections::HashSet;

use super::model::Movie;

/// Session-scoped accumulation of every movie fetched so far.
///
/// Append-only: an id is stored once, in the order it was first seen, and
/// entries are never evicted.
#[derive(Debug, Default, Clone)]
pub struct LocalCache {
    movies: Vec<Movie>,
    ids: HashSet<i64>,
}

impl LocalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the movies whose id is not cached yet and returns how many were added.
    pub fn append_new(&mut self, movies: &[Movie]) -> usize {
        let before = self.movies.len();
        for movie in movies {
            if self.ids.insert(movie.id) {
                self.movies.push(movie.clone());
            }
        }
        self.movies.len() - before
    }

    pub fn snapshot(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    /// Case-insensitive substring match on titles.
    pub fn filter_by_title(&self, query: &str) -> Vec<Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
