//! `MoviesClient` - MovieBuffs catalog client implementation.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::MoviesApi;
use super::error::FetchError;
use super::types::Movie;

/// Base URL for the MovieBuffs GitHub Pages host.
pub const MOVIEBUFFS_BASE_URL: &str = "https://kareemy.github.io/";

/// Relative path of the movie catalog document.
const MOVIES_PATH: &str = "MovieBuffs/movies.json";

/// Default User-Agent for catalog requests.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// MovieBuffs catalog client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MoviesClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Resolved catalog document URL.
    movies_url: Url,
}

/// Builder for `MoviesClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MoviesClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl MoviesClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests or self-hosted mirrors).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: crate name and version).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - The base URL cannot be extended with the catalog path.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<MoviesClient> {
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(MOVIEBUFFS_BASE_URL);
            result.context("invalid default base URL")?
        };

        let movies_url = base_url
            .join(MOVIES_PATH)
            .with_context(|| format!("failed to join URL path: {MOVIES_PATH}"))?;

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(MoviesClient {
            http_client,
            movies_url,
        })
    }
}

impl MoviesClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MoviesClientBuilder {
        MoviesClientBuilder::new()
    }
}

impl MoviesApi for MoviesClient {
    #[instrument(skip_all)]
    async fn fetch_movies(&self) -> Result<Vec<Movie>, FetchError> {
        tracing::debug!(url = %self.movies_url, "MovieBuffs catalog request");

        let response = self
            .http_client
            .get(self.movies_url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network { source })?;

        let response = response
            .error_for_status()
            .map_err(|source| FetchError::Network { source })?;

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network { source })?;

        let movies: Vec<Movie> =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode { source })?;

        tracing::debug!(count = movies.len(), "movie catalog decoded");
        Ok(movies)
    }
}
