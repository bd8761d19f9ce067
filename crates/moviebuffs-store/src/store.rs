//! `MovieStore` - observable catalog state container.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::instrument;

use crate::state::{FetchState, UiState};
use moviebuffs_api::movies::{Movie, MoviesApi};

/// Observable catalog state container.
///
/// Wraps a catalog client and publishes [`UiState`] snapshots through a
/// watch channel. Every refresh runs under a monotonic generation: only
/// the most recently started refresh may publish, so a slow fetch can
/// never overwrite the outcome of a newer one.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieStore<C> {
    /// Catalog client.
    client: C,
    /// State publisher. Receivers observe every committed snapshot.
    state_tx: watch::Sender<UiState>,
    /// Monotonic refresh generation counter.
    fetch_seq: AtomicU64,
}

impl<C> MovieStore<C>
where
    C: MoviesApi,
{
    /// Creates a store over a catalog client.
    ///
    /// The initial state is [`FetchState::Loading`] with list navigation
    /// active. Construction performs no I/O; call
    /// [`refresh`](Self::refresh) to start the first fetch.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            state_tx: watch::Sender::new(UiState::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Subscribes to state snapshots.
    ///
    /// The receiver starts at the current snapshot and is marked changed
    /// on every committed update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state_tx.subscribe()
    }

    /// Returns a clone of the current state snapshot.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state_tx.borrow().clone()
    }

    /// Fetches the catalog and commits the outcome.
    ///
    /// Publishes [`FetchState::Loading`] on entry and the terminal
    /// `Success`/`Error` state on completion; both are dropped if a newer
    /// refresh has started in the meantime. A committed `Success`
    /// re-resolves the current selection against the new catalog by
    /// title, replacing the record when the title is still present and
    /// clearing it when it is gone. Fetch errors never propagate: they
    /// are logged and recorded as [`FetchState::Error`].
    #[instrument(skip_all)]
    pub async fn refresh(&self) {
        let generation = self.fetch_seq.fetch_add(1, Ordering::SeqCst).wrapping_add(1);

        let entered = self.publish_if_current(generation, |state| {
            state.fetch = FetchState::Loading;
        });
        if !entered {
            tracing::debug!(generation, "refresh superseded before start");
            return;
        }

        match self.client.fetch_movies().await {
            Ok(movies) => {
                let count = movies.len();
                let committed = self.publish_if_current(generation, |state| {
                    state.navigation.selected =
                        state.navigation.selected.take().and_then(|previous| {
                            movies.iter().find(|m| m.title == previous.title).cloned()
                        });
                    state.fetch = FetchState::Success(movies);
                });
                if committed {
                    tracing::debug!(generation, count, "catalog refresh committed");
                } else {
                    tracing::debug!(generation, "stale refresh result discarded");
                }
            }
            Err(error) => {
                tracing::warn!(kind = %error.kind(), %error, "catalog refresh failed");
                let committed = self.publish_if_current(generation, |state| {
                    state.fetch = FetchState::Error(error.kind());
                });
                if !committed {
                    tracing::debug!(generation, "stale refresh error discarded");
                }
            }
        }
    }

    /// Selects a movie for the detail screen.
    ///
    /// Ignored (with a debug log) unless the catalog fetch has
    /// succeeded: a selection only ever exists alongside a fetched
    /// catalog.
    pub fn select_movie(&self, movie: Movie) {
        self.state_tx.send_if_modified(|state| {
            if !matches!(state.fetch, FetchState::Success(_)) {
                tracing::debug!(title = %movie.title, "selection ignored without a fetched catalog");
                return false;
            }
            state.navigation.selected = Some(movie);
            true
        });
    }

    /// Switches to the detail screen.
    pub fn show_detail(&self) {
        self.state_tx.send_if_modified(|state| {
            if !state.navigation.list_mode {
                return false;
            }
            state.navigation.list_mode = false;
            true
        });
    }

    /// Switches back to the list screen.
    pub fn show_list(&self) {
        self.state_tx.send_if_modified(|state| {
            if state.navigation.list_mode {
                return false;
            }
            state.navigation.list_mode = true;
            true
        });
    }

    /// Applies `apply` and publishes the result unless a newer refresh
    /// generation has started. The check runs inside the channel's modify
    /// lock, so a stale writer can never overwrite a newer snapshot.
    fn publish_if_current(&self, generation: u64, apply: impl FnOnce(&mut UiState)) -> bool {
        self.state_tx.send_if_modified(|state| {
            if self.fetch_seq.load(Ordering::SeqCst) != generation {
                return false;
            }
            apply(state);
            true
        })
    }
}
