//! Recording dispatch handle for sync-operation tests.

use std::future::Future;
use std::sync::Mutex;

use todoflow_core::Dispatcher;

/// A [`Dispatcher`] that records every action instead of applying it.
///
/// Lets tests assert exactly which actions a sync operation delivered, and
/// that a failed operation delivered none.
///
/// # Example
///
/// ```ignore
/// let dispatcher = RecordingDispatcher::new();
/// sync::fetch_all(&client, &dispatcher).await?;
/// assert_eq!(dispatcher.dispatched().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingDispatcher<A> {
    actions: Mutex<Vec<A>>,
}

impl<A> RecordingDispatcher<A> {
    /// Create an empty recorder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Mutex::new(Vec::new()),
        }
    }

    /// The actions dispatched so far, in delivery order
    #[must_use]
    pub fn dispatched(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.actions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of actions dispatched so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Whether nothing was dispatched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A> Dispatcher<A> for RecordingDispatcher<A>
where
    A: Send + Sync,
{
    fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
        self.actions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(action);
        std::future::ready(())
    }
}
