//! The dispatch seam between sync operations and a state store.
//!
//! Sync operations never touch state directly; they are handed a
//! [`Dispatcher`] and deliver their resulting actions through it. Passing
//! the handle explicitly keeps the operations pure with respect to their
//! inputs and lets tests substitute a recording implementation.

use std::future::Future;

/// A handle for delivering actions to a state store
pub trait Dispatcher<A>: Send + Sync {
    /// Deliver `action` to the store.
    ///
    /// Completes once the action has been applied (or recorded); delivery
    /// itself cannot fail — reducers are total.
    fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send;
}

impl<A, D> Dispatcher<A> for &D
where
    A: Send + 'static,
    D: Dispatcher<A>,
{
    fn dispatch(&self, action: A) -> impl Future<Output = ()> + Send {
        (**self).dispatch(action)
    }
}
