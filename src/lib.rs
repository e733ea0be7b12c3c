//! Pokecache - A Pokedex REPL backed by a time-bounded response cache
//!
//! The [`Cache`] stores raw PokeAPI response bodies keyed by request URL and
//! expires them with a periodic background sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{ApiError, Result};
