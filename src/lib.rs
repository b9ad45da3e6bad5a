//! Movie catalog client core: a repository that blends the remote catalog
//! with a session cache and falls back to it when offline, plus the popular
//! feed state machine, served over HTTP.

pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod infrastructure;
pub mod modules;
pub mod routes;
pub mod state;
