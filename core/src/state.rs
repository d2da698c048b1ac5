//! Application state: the todo collection and the active display filter.

use crate::types::TodoItem;
use serde::{Deserialize, Serialize};

/// Which subset of the todo collection observers should display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Whether `item` passes this filter
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.is_completed,
            Self::Completed => item.is_completed,
        }
    }
}

/// State of the todo application.
///
/// Created once per session, empty and unfiltered; replaced wholesale on
/// every accepted action and discarded when the owning session ends. The
/// collection keeps insertion order as returned by the remote resource,
/// with local additions appended at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Ordered todo collection; identifiers are unique
    pub todos: Vec<TodoItem>,
    /// Active display filter
    pub filter: Filter,
}

impl AppState {
    /// Creates the initial state: no todos, `Filter::All`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            filter: Filter::All,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.is_completed).count()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed).count()
    }

    /// Iterates over the todos passing the active filter, in order
    pub fn visible(&self) -> impl Iterator<Item = &TodoItem> {
        self.todos.iter().filter(|t| self.filter.matches(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;

    fn todo(id: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            text: format!("todo {id}"),
            is_completed: completed,
        }
    }

    #[test]
    fn initial_state_is_empty_and_unfiltered() {
        let state = AppState::new();
        assert!(state.todos.is_empty());
        assert_eq!(state.filter, Filter::All);
    }

    #[test]
    fn counts_split_by_completion() {
        let state = AppState {
            todos: vec![todo("1", false), todo("2", true), todo("3", true)],
            filter: Filter::All,
        };
        assert_eq!(state.count(), 3);
        assert_eq!(state.active_count(), 1);
        assert_eq!(state.completed_count(), 2);
    }

    #[test]
    fn visible_respects_filter_and_order() {
        let state = AppState {
            todos: vec![todo("1", false), todo("2", true), todo("3", false)],
            filter: Filter::Active,
        };
        let ids: Vec<_> = state.visible().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn filter_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Filter::Active).unwrap(), "active");
        assert_eq!(
            serde_json::from_value::<Filter>("completed".into()).unwrap(),
            Filter::Completed
        );
    }
}
