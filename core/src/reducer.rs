//! The pure state-transition function.
//!
//! Reducers here are total and side-effect free: `(State, Action) → State`.
//! The input state is borrowed, never mutated; callers receive a freshly
//! built successor state and replace their copy atomically. There are no
//! error conditions — malformed or unrecognized actions reduce to the
//! identity transition.

use crate::action::Action;
use crate::state::AppState;
use crate::types::TodoItem;

/// The Reducer trait — a pure transition from one state to the next
///
/// # Example
///
/// ```ignore
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
///         match action {
///             CounterAction::Increment => CounterState { count: state.count + 1 },
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// Compute the successor state for `action`.
    ///
    /// Must be deterministic, perform no I/O, and leave `state` untouched.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Reducer for the todo application
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = AppState;
    type Action = Action;

    fn reduce(&self, state: &AppState, action: &Action) -> AppState {
        match action {
            Action::GetTodos { todos } => AppState {
                todos: todos.clone(),
                filter: state.filter,
            },

            Action::AddTodo { todo } => {
                let mut todos = state.todos.clone();
                todos.push(todo.clone());
                AppState {
                    todos,
                    filter: state.filter,
                }
            }

            Action::UpdateTodo { id, patch } => AppState {
                todos: state
                    .todos
                    .iter()
                    .map(|todo| {
                        if todo.id == *id {
                            todo.merged(patch)
                        } else {
                            todo.clone()
                        }
                    })
                    .collect(),
                filter: state.filter,
            },

            Action::RemoveTodo { id } => AppState {
                todos: state
                    .todos
                    .iter()
                    .filter(|todo| todo.id != *id)
                    .cloned()
                    .collect(),
                filter: state.filter,
            },

            Action::ToggleAll { is_completed } => AppState {
                todos: state
                    .todos
                    .iter()
                    .map(|todo| TodoItem {
                        is_completed: *is_completed,
                        ..todo.clone()
                    })
                    .collect(),
                filter: state.filter,
            },

            Action::ChangeFilter { filter } => AppState {
                todos: state.todos.clone(),
                filter: *filter,
            },

            Action::Unknown => state.clone(),
        }
    }
}
