//! Simple CLI demo for the todoflow workspace.
//!
//! Runs the store with purely local actions by default. Set
//! `TODOS_BASE_URL` (and optionally `TODOS_TOKEN`) to drive the sync layer
//! against a live collection resource instead.

use todoflow_client::{TodosClient, sync};
use todoflow_core::{Action, AppState, Filter, TodoDraft, TodoId, TodoItem, TodoReducer};
use todoflow_runtime::Store;

fn print_state(state: &AppState) {
    for todo in state.visible() {
        let status = if todo.is_completed { "✓" } else { " " };
        println!("  [{}] {} ({})", status, todo.text, todo.id);
    }
    println!(
        "  {} total, {} active, {} completed\n",
        state.count(),
        state.active_count(),
        state.completed_count()
    );
}

async fn local_demo(store: &Store<AppState, Action, TodoReducer>) {
    println!("Adding todos locally...");
    for (id, text) in [("1", "Buy milk"), ("2", "Write documentation"), ("3", "Ship it")] {
        store
            .send(Action::AddTodo {
                todo: TodoItem {
                    id: TodoId::new(id),
                    text: text.to_string(),
                    is_completed: false,
                },
            })
            .await;
    }
    print_state(&store.snapshot().await);

    println!("Completing everything...");
    store.send(Action::ToggleAll { is_completed: true }).await;
    print_state(&store.snapshot().await);

    println!("Showing only active todos...");
    store
        .send(Action::ChangeFilter {
            filter: Filter::Active,
        })
        .await;
    print_state(&store.snapshot().await);
}

async fn remote_demo(
    store: &Store<AppState, Action, TodoReducer>,
    base_url: String,
) -> anyhow::Result<()> {
    let mut client = TodosClient::new(base_url);
    if let Ok(token) = std::env::var("TODOS_TOKEN") {
        client = client.with_token(token);
    }

    println!("Fetching the remote collection...");
    sync::fetch_all(&client, store).await?;
    print_state(&store.snapshot().await);

    println!("Creating a todo remotely...");
    sync::create(&client, store, TodoDraft::new("Created by todoflow-cli")).await?;
    print_state(&store.snapshot().await);

    println!("Completing everything remotely...");
    let current = store.state(|s| s.todos.clone()).await;
    sync::toggle_all(&client, store, true, &current).await?;
    print_state(&store.snapshot().await);

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Todoflow Demo ===\n");

    let store = Store::new(AppState::new(), TodoReducer);

    match std::env::var("TODOS_BASE_URL") {
        Ok(base_url) => remote_demo(&store, base_url).await?,
        Err(_) => local_demo(&store).await,
    }

    println!("=== Demo Complete ===");
    Ok(())
}
