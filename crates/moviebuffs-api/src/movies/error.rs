//! Typed errors for catalog fetch operations.

use thiserror::Error;

/// Errors that can occur while fetching the movie catalog.
///
/// The two variants separate transport failures from payload failures so
/// callers can report them differently.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum FetchError {
    /// The HTTP request failed (connection, TLS, timeout, or an
    /// unsuccessful status code).
    #[error("catalog request failed: {source}")]
    Network {
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a valid movie catalog document.
    #[error("catalog decoding failed: {source}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`FetchError`].
///
/// `reqwest::Error` is not `Clone`; state snapshots store this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport-level failure.
    Network,
    /// Payload decoding failure.
    Decode,
}

impl FetchError {
    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } => FetchErrorKind::Network,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }
}

impl FetchErrorKind {
    /// Returns a short stable label for logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Decode => "decode",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
