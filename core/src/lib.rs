//! # Todoflow Core
//!
//! Core types and the pure state-transition logic for the todoflow
//! architecture.
//!
//! This crate provides the fundamental abstractions for a unidirectional
//! todo application:
//!
//! - **State**: [`AppState`] — the todo collection plus the active display
//!   filter
//! - **Action**: [`Action`] — a tagged description of a state change
//! - **Reducer**: [`reducer::Reducer`] — pure function
//!   `(State, Action) → State`
//! - **Dispatcher**: [`dispatch::Dispatcher`] — the explicit handle used to
//!   deliver actions to a store
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow: sync operations never touch state directly;
//!   all communication happens through dispatched actions
//! - Pure transitions: the reducer is total, deterministic, and performs no
//!   I/O — state is replaced, never mutated in place
//! - Explicit dependencies: dispatch handles and credentials are passed in,
//!   never read from ambient storage
//!
//! ## Example
//!
//! ```
//! use todoflow_core::{Action, AppState, TodoId, TodoItem};
//! use todoflow_core::reducer::{Reducer, TodoReducer};
//!
//! let state = AppState::new();
//! let action = Action::AddTodo {
//!     todo: TodoItem {
//!         id: TodoId::new("1"),
//!         text: "write docs".to_string(),
//!         is_completed: false,
//!     },
//! };
//!
//! let next = TodoReducer.reduce(&state, &action);
//! assert_eq!(next.todos.len(), 1);
//! assert!(state.todos.is_empty()); // the input state is untouched
//! ```

pub mod action;
pub mod dispatch;
pub mod reducer;
pub mod state;
pub mod types;

pub use action::Action;
pub use dispatch::Dispatcher;
pub use reducer::{Reducer, TodoReducer};
pub use state::{AppState, Filter};
pub use types::{TodoDraft, TodoId, TodoItem, TodoPatch};
