//! Domain types for the todo collection.
//!
//! The wire representation is camelCase (`isCompleted`) to match the remote
//! collection resource; identifiers are opaque strings assigned by the
//! remote at creation time and are never generated locally.

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a todo item.
///
/// Assigned by the remote resource when an item is created. The content is
/// not interpreted locally beyond equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a `TodoId` from a server-assigned identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, assigned by the remote resource
    pub id: TodoId,
    /// User-provided content
    pub text: String,
    /// Completion flag
    pub is_completed: bool,
}

impl TodoItem {
    /// Returns a copy of this item with `patch` merged over it.
    ///
    /// Fields present in the patch override; absent fields are retained.
    /// The identifier is never changed by a merge.
    #[must_use]
    pub fn merged(&self, patch: &TodoPatch) -> Self {
        Self {
            id: self.id.clone(),
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            is_completed: patch.is_completed.unwrap_or(self.is_completed),
        }
    }
}

/// Body of a create request: everything but the identifier, which the
/// remote resource assigns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    /// Content of the new item
    pub text: String,
    /// Initial completion flag
    pub is_completed: bool,
}

impl TodoDraft {
    /// Creates a draft for a new, not-yet-completed item
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_completed: false,
        }
    }
}

/// Partial update for a todo item.
///
/// `None` fields are omitted from the serialized body and retained on merge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    /// Replacement content, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Replacement completion flag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only changes the content
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            is_completed: None,
        }
    }

    /// Patch that only changes the completion flag
    #[must_use]
    pub const fn completed(is_completed: bool) -> Self {
        Self {
            text: None,
            is_completed: Some(is_completed),
        }
    }
}

impl From<&TodoItem> for TodoPatch {
    /// Full-replacement patch carrying every field of a server-returned
    /// representation.
    fn from(item: &TodoItem) -> Self {
        Self {
            text: Some(item.text.clone()),
            is_completed: Some(item.is_completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> TodoItem {
        TodoItem {
            id: TodoId::new("1"),
            text: "foo".to_string(),
            is_completed: false,
        }
    }

    #[test]
    fn todo_item_uses_camel_case_wire_format() {
        let json = serde_json::to_value(item()).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["text"], "foo");
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn merged_applies_present_fields_only() {
        let merged = item().merged(&TodoPatch::text("bar"));
        assert_eq!(merged.text, "bar");
        assert!(!merged.is_completed);
        assert_eq!(merged.id, TodoId::new("1"));
    }

    #[test]
    fn merged_with_empty_patch_is_identity() {
        assert_eq!(item().merged(&TodoPatch::default()), item());
    }

    #[test]
    fn patch_from_item_replaces_every_field() {
        let server_item = TodoItem {
            id: TodoId::new("1"),
            text: "bar".to_string(),
            is_completed: true,
        };
        let merged = item().merged(&TodoPatch::from(&server_item));
        assert_eq!(merged, server_item);
    }

    #[test]
    fn patch_skips_absent_fields_on_the_wire() {
        let json = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["isCompleted"], true);
    }

    #[test]
    fn draft_serializes_without_id() {
        let json = serde_json::to_value(TodoDraft::new("foo")).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["text"], "foo");
        assert_eq!(json["isCompleted"], false);
    }
}
