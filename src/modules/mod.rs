pub mod feed;
pub mod genre;
pub mod movie;
