//! # Todoflow Testing
//!
//! Testing utilities for the todoflow architecture.
//!
//! This crate provides:
//! - [`ReducerTest`] — a fluent Given-When-Then builder for reducer tests
//! - [`RecordingDispatcher`] — a dispatch handle that collects actions
//!   instead of applying them, for asserting what a sync operation
//!   delivered
//!
//! ## Example
//!
//! ```
//! use todoflow_core::{Action, AppState, Filter, TodoReducer};
//! use todoflow_testing::ReducerTest;
//!
//! ReducerTest::new(TodoReducer)
//!     .given_state(AppState::new())
//!     .when_action(Action::ChangeFilter { filter: Filter::Active })
//!     .then_state(|state| {
//!         assert_eq!(state.filter, Filter::Active);
//!     })
//!     .run();
//! ```

pub mod dispatcher;
pub mod reducer_test;

pub use dispatcher::RecordingDispatcher;
pub use reducer_test::ReducerTest;
