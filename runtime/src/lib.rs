//! # Todoflow Runtime
//!
//! The Store runtime: owns a single state value, applies actions through a
//! pure reducer, and exposes the resulting snapshots to observers.
//!
//! ## Concurrency model
//!
//! There is one logical state per store. [`Store::send`] acquires a write
//! lock, computes the successor state with the reducer, and replaces the
//! state in one step — the state is never partially mutated, which is the
//! only concurrency guarantee the store provides. Concurrent `send` calls
//! serialize at the lock; two in-flight sync operations race, and whichever
//! action is applied last wins. A slow update completing after a removal of
//! the same item will reintroduce it. The store performs no de-duplication,
//! cancellation, or coalescing of superseded actions.
//!
//! ## Example
//!
//! ```
//! use todoflow_core::{Action, AppState, TodoReducer};
//! use todoflow_runtime::Store;
//!
//! # tokio_test::block_on(async {
//! let store = Store::new(AppState::new(), TodoReducer);
//!
//! store
//!     .send(Action::ToggleAll { is_completed: true })
//!     .await;
//!
//! let count = store.state(|s| s.count()).await;
//! assert_eq!(count, 0);
//! # });
//! ```

use std::sync::Arc;

use todoflow_core::{Dispatcher, Reducer};
use tokio::sync::{RwLock, watch};

/// The Store — owns state and applies actions through a reducer
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `R`: Reducer implementation
pub struct Store<S, A, R>
where
    R: Reducer<State = S, Action = A>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    /// Snapshot channel for observers; holds the latest accepted state.
    observers: watch::Sender<S>,
}

impl<S, A, R> Store<S, A, R>
where
    R: Reducer<State = S, Action = A> + Send + Sync,
    S: Clone + Send + Sync,
    A: std::fmt::Debug + Send,
{
    /// Create a new store with its initial state and reducer
    #[must_use]
    pub fn new(initial_state: S, reducer: R) -> Self {
        let (observers, _) = watch::channel(initial_state.clone());

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            observers,
        }
    }

    /// Apply an action to the store.
    ///
    /// Computes the successor state with the pure reducer and replaces the
    /// current state atomically, then publishes the new snapshot to
    /// observers. Reducers are total, so applying an action cannot fail;
    /// unrecognized actions leave the state unchanged.
    pub async fn send(&self, action: A) {
        let mut state = self.state.write().await;
        let next = self.reducer.reduce(&state, &action);
        *state = next;

        // Observers missing intermediate snapshots only ever see newer state.
        let _ = self.observers.send(state.clone());

        tracing::debug!(?action, "action applied");
    }

    /// Project a value out of the current state.
    ///
    /// Takes a read lock for the duration of `f`.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Returns a clone of the current state
    pub async fn snapshot(&self) -> S {
        self.state.read().await.clone()
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver sees the latest accepted state; intermediate snapshots
    /// may be skipped under load.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.observers.subscribe()
    }
}

impl<S, A, R> Dispatcher<A> for Store<S, A, R>
where
    R: Reducer<State = S, Action = A> + Send + Sync,
    S: Clone + Send + Sync,
    A: std::fmt::Debug + Send,
{
    fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
        self.send(action)
    }
}
