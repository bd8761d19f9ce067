//! View state types for the movie catalog UI.
#![allow(clippy::module_name_repetitions)]

use moviebuffs_api::movies::{FetchErrorKind, Movie};

/// Catalog fetch lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// A fetch is in flight and no outcome has been committed yet.
    #[default]
    Loading,
    /// The catalog was fetched and decoded.
    Success(Vec<Movie>),
    /// The fetch failed.
    Error(FetchErrorKind),
}

impl FetchState {
    /// Returns the fetched movies if the last fetch succeeded.
    #[must_use]
    pub fn movies(&self) -> Option<&[Movie]> {
        match self {
            Self::Success(movies) => Some(movies),
            Self::Loading | Self::Error(_) => None,
        }
    }
}

/// List/detail navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Movie shown on the detail screen, if any.
    pub selected: Option<Movie>,
    /// Whether the list screen is active (detail screen otherwise).
    pub list_mode: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            selected: None,
            list_mode: true,
        }
    }
}

/// Complete observable UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Catalog fetch state.
    pub fetch: FetchState,
    /// Navigation state.
    pub navigation: NavigationState,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: String::from(title),
            poster: String::from("https://example.invalid/poster.jpg"),
            description: String::from("description"),
            release_date: String::from("2001-01-01"),
            content_rating: String::from("PG"),
            review_score: String::from("8.0"),
            big_image: String::from("https://example.invalid/big.jpg"),
            length: String::from("100 min"),
        }
    }

    #[test]
    fn test_default_state_is_loading_list() {
        // Arrange & Act
        let state = UiState::default();

        // Assert
        assert_eq!(state.fetch, FetchState::Loading);
        assert_eq!(state.navigation.selected, None);
        assert!(state.navigation.list_mode);
    }

    #[test]
    fn test_movies_accessor() {
        // Arrange
        let success = FetchState::Success(vec![movie("Casablanca")]);

        // Act & Assert
        assert_eq!(success.movies().unwrap().len(), 1);
        assert_eq!(FetchState::Loading.movies(), None);
        assert_eq!(FetchState::Error(FetchErrorKind::Network).movies(), None);
    }
}
