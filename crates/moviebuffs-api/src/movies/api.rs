//! `MoviesApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::FetchError;
use super::types::Movie;

/// MovieBuffs catalog API trait.
///
/// Abstracts catalog retrieval for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MoviesApi: Send)]
pub trait LocalMoviesApi {
    /// Fetches the full movie catalog.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP request fails and
    /// [`FetchError::Decode`] if the response body is not a valid
    /// catalog document.
    async fn fetch_movies(&self) -> Result<Vec<Movie>, FetchError>;
}
