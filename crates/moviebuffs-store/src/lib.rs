//! Observable view state for the MovieBuffs catalog.
//!
//! Owns the catalog fetch lifecycle and list/detail navigation state on
//! top of a `MoviesApi` client, and publishes every state change through
//! a watch channel for rendering layers to observe.

mod state;
mod store;

pub use state::{FetchState, NavigationState, UiState};
pub use store::MovieStore;
