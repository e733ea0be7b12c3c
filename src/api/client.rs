//! PokeAPI Client
//!
//! Fetches raw response bodies through the shared [`Cache`] and decodes them
//! into the typed models.

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Number of location areas requested per page
pub const PAGE_SIZE: u32 = 20;

/// HTTP client that consults the cache before going to the network.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client for the configured base URL backed by `cache`.
    pub fn new(config: &Config, cache: Cache) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            cache,
        })
    }

    /// Returns the cache this client reads through.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, PAGE_SIZE
        )
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// On a miss the body is fetched and, if the response was successful,
    /// stored under `url`. Error responses are never cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }

        debug!("Cache miss for {}, fetching", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;

        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a page of location areas; `None` requests the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };

        self.fetch_json(&url).await
    }

    /// Fetches the details of one location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches a single pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }
}
