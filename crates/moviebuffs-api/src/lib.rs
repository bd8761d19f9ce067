//! API client library for MovieBuffs.
//!
//! Provides a client for the movie catalog published on the MovieBuffs
//! GitHub Pages host.

/// MovieBuffs catalog client.
pub mod movies;
