//! Sync operations bridging the remote resource and a state store.
//!
//! Each operation performs its network call(s) first and, only on full
//! success, delivers exactly one action through the injected [`Dispatcher`].
//! On failure nothing is dispatched — the state keeps showing the
//! last-known-good list — and the error propagates to the caller. No
//! operation retries, supports cancellation, or updates state optimistically
//! before the round trip completes.
//!
//! Operations issued back-to-back resolve independently; their dispatches
//! land in whatever order the underlying calls complete (see the runtime
//! crate's concurrency notes).

use crate::client::TodosClient;
use crate::error::SyncError;
use futures::future;
use todoflow_core::{Action, Dispatcher, TodoDraft, TodoId, TodoItem, TodoPatch};

/// Read the entire remote collection and dispatch `GetTodos`.
///
/// # Errors
///
/// Propagates [`SyncError`] from the read; nothing is dispatched on failure.
#[tracing::instrument(skip_all)]
pub async fn fetch_all<D>(client: &TodosClient, dispatch: &D) -> Result<(), SyncError>
where
    D: Dispatcher<Action>,
{
    let todos = client.list_todos().await?;
    tracing::debug!(count = todos.len(), "fetched remote collection");
    dispatch.dispatch(Action::GetTodos { todos }).await;
    Ok(())
}

/// Create an item remotely and dispatch `AddTodo` with the server-assigned
/// item.
///
/// There is no optimistic insert: local state is untouched until the remote
/// confirms the creation and hands back the item's identifier.
///
/// # Errors
///
/// Propagates [`SyncError`] from the create; nothing is dispatched on
/// failure.
#[tracing::instrument(skip(client, dispatch))]
pub async fn create<D>(
    client: &TodosClient,
    dispatch: &D,
    draft: TodoDraft,
) -> Result<(), SyncError>
where
    D: Dispatcher<Action>,
{
    let todo = client.create_todo(&draft).await?;
    tracing::debug!(id = %todo.id, "created remote item");
    dispatch.dispatch(Action::AddTodo { todo }).await;
    Ok(())
}

/// Update item `id` remotely and dispatch `UpdateTodo`.
///
/// The dispatched payload is built from the server's returned
/// representation, not from the local patch, so the store converges on
/// whatever the remote actually stored.
///
/// # Errors
///
/// Propagates [`SyncError`] from the update; nothing is dispatched on
/// failure.
#[tracing::instrument(skip(client, dispatch, patch), fields(id = %id))]
pub async fn update<D>(
    client: &TodosClient,
    dispatch: &D,
    id: TodoId,
    patch: TodoPatch,
) -> Result<(), SyncError>
where
    D: Dispatcher<Action>,
{
    let updated = client.update_todo(&id, &patch).await?;
    dispatch
        .dispatch(Action::UpdateTodo {
            id,
            patch: TodoPatch::from(&updated),
        })
        .await;
    Ok(())
}

/// Delete item `id` remotely, then dispatch `RemoveTodo`.
///
/// The removal reaches local state only after the remote call completes.
///
/// # Errors
///
/// Propagates [`SyncError`] from the delete; nothing is dispatched on
/// failure.
#[tracing::instrument(skip(client, dispatch), fields(id = %id))]
pub async fn remove<D>(client: &TodosClient, dispatch: &D, id: TodoId) -> Result<(), SyncError>
where
    D: Dispatcher<Action>,
{
    client.delete_todo(&id).await?;
    dispatch.dispatch(Action::RemoveTodo { id }).await;
    Ok(())
}

/// Set the completion flag on every item remotely, then dispatch a single
/// `ToggleAll`.
///
/// Fans out one update per item in `current`, preserving each item's text.
/// All-or-nothing: if any update fails the whole operation fails and
/// nothing is dispatched, even though some remote items may already carry
/// the new flag.
///
/// # Errors
///
/// Propagates the first [`SyncError`] from the fan-out.
#[tracing::instrument(skip(client, dispatch, current), fields(items = current.len()))]
pub async fn toggle_all<D>(
    client: &TodosClient,
    dispatch: &D,
    is_completed: bool,
    current: &[TodoItem],
) -> Result<(), SyncError>
where
    D: Dispatcher<Action>,
{
    let updates = current.iter().map(|todo| {
        let patch = TodoPatch {
            text: Some(todo.text.clone()),
            is_completed: Some(is_completed),
        };
        async move { client.update_todo(&todo.id, &patch).await }
    });

    future::try_join_all(updates).await?;
    dispatch.dispatch(Action::ToggleAll { is_completed }).await;
    Ok(())
}
