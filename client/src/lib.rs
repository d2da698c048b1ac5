//! # Todoflow Client
//!
//! The sync layer: asynchronous operations that call the remote todo
//! collection resource and, on success, feed the result back into a state
//! store as a dispatched action.
//!
//! ## Components
//!
//! - [`TodosClient`] — reqwest-based REST client for the collection
//!   resource, with explicit bearer-credential injection
//! - [`sync`] — the five operations ([`sync::fetch_all`], [`sync::create`],
//!   [`sync::update`], [`sync::remove`], [`sync::toggle_all`])
//! - [`Fetch`] — the generic request-state primitive the layer is built on
//! - [`SyncError`] — transport, status, and payload-shape failures
//!
//! ## Remote interface
//!
//! A conventional REST resource is assumed:
//!
//! | Call | Route | Result |
//! |------|-------|--------|
//! | list | `GET /todos` | array of items |
//! | create | `POST /todos` | created item with server-assigned id |
//! | update | `PUT /todos/{id}` | updated item |
//! | delete | `DELETE /todos/{id}` | no body required |
//!
//! ## Example
//!
//! ```no_run
//! use todoflow_client::{sync, TodosClient};
//! use todoflow_core::{AppState, TodoDraft, TodoReducer};
//! use todoflow_runtime::Store;
//!
//! # async fn example() -> Result<(), todoflow_client::SyncError> {
//! let client = TodosClient::new("http://localhost:3004").with_token("secret");
//! let store = Store::new(AppState::new(), TodoReducer);
//!
//! sync::fetch_all(&client, &store).await?;
//! sync::create(&client, &store, TodoDraft::new("write docs")).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod fetch;
pub mod sync;

pub use client::TodosClient;
pub use error::SyncError;
pub use fetch::{Fetch, FetchState, RequestConfig};
