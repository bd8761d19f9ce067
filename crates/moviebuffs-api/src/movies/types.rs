//! Movie catalog record types.

use serde::{Deserialize, Serialize};

/// A single movie record from the catalog document.
///
/// Every field arrives as a string in the published dataset, including
/// `review_score` and `length`. Titles are unique within one catalog and
/// act as the de-facto record key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Movie {
    /// Movie title.
    pub title: String,
    /// Poster image URL (list thumbnail).
    pub poster: String,
    /// Plot description.
    pub description: String,
    /// Release date.
    pub release_date: String,
    /// Content rating (e.g. "PG-13").
    pub content_rating: String,
    /// Review score (e.g. "9.3").
    pub review_score: String,
    /// Backdrop image URL (detail header).
    pub big_image: String,
    /// Running time (e.g. "142 min").
    pub length: String,
}
