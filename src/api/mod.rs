//! API Module
//!
//! Read-through client for the remote PokeAPI. Every response body is cached
//! under its full request URL.
//!
//! # Endpoints
//! - `GET /location-area?offset=&limit=` - Paginated location areas
//! - `GET /location-area/{name}` - Pokemon found in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
