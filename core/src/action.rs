//! Actions: tagged descriptions of state changes.
//!
//! Actions unify everything that can happen to [`AppState`](crate::AppState):
//! sync results arriving from the remote resource and purely local changes
//! such as switching the display filter. Tags serialize camelCase under a
//! `type` field; tags the application does not recognize deserialize to
//! [`Action::Unknown`], which the reducer treats as an identity transition.

use crate::state::Filter;
use crate::types::{TodoId, TodoItem, TodoPatch};
use serde::{Deserialize, Serialize};

/// A state change to apply to the todo application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Replace the todo collection wholesale with the remote's items
    GetTodos {
        /// Items as returned by the remote resource, in order
        todos: Vec<TodoItem>,
    },

    /// Append a server-created item to the end of the collection
    AddTodo {
        /// The created item, carrying its server-assigned identifier
        todo: TodoItem,
    },

    /// Merge a patch over the item with a matching identifier
    UpdateTodo {
        /// Which item to update
        id: TodoId,
        /// Fields to override; absent fields are retained
        patch: TodoPatch,
    },

    /// Remove the item with a matching identifier
    RemoveTodo {
        /// Which item to remove
        id: TodoId,
    },

    /// Set the completion flag on every item
    ToggleAll {
        /// The flag value to apply across the collection
        is_completed: bool,
    },

    /// Replace the active display filter
    ChangeFilter {
        /// The new filter
        filter: Filter,
    },

    /// Unrecognized action tag; reduces to the identity transition
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_tag_under_type() {
        let action = Action::ToggleAll { is_completed: true };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "toggleAll");
        assert_eq!(json["is_completed"], true);
    }

    #[test]
    fn unrecognized_tags_deserialize_to_unknown() {
        let action: Action = serde_json::from_str(r#"{"type":"somethingElse"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }

    #[test]
    fn change_filter_roundtrips() {
        let action = Action::ChangeFilter {
            filter: Filter::Active,
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), action);
    }
}
