//! MovieBuffs catalog client module.
//!
//! Handles the HTTP request to the `movies.json` document on the
//! MovieBuffs GitHub Pages host and decodes the movie catalog.

mod api;
mod client;
mod error;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMoviesApi, MoviesApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{MOVIEBUFFS_BASE_URL, MoviesClient, MoviesClientBuilder};
pub use error::{FetchError, FetchErrorKind};
pub use types::Movie;
