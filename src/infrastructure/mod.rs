pub mod connectivity;
pub mod tmdb;
