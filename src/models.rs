//! Frontend Models
//!
//! Data structures matching the todo backend's JSON documents.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Server-assigned todo identifier.
///
/// Opaque: the backend may hand out strings or numbers, both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => TodoId(s),
            Raw::Number(n) => TodoId(n.to_string()),
        })
    }
}

/// Todo item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// `DD/MM/YYYY`, empty when the server has none
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub finished: bool,
    /// Whatever else the server stores (temporary client id, timestamps...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Missing or `null` fields decode as the default so one odd record can't
/// reject the whole list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a create request.
///
/// `id` is a client-side timestamp placeholder; the server assigns the real one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub id: i64,
    pub name: String,
    pub date_start: String,
    pub finished: bool,
}

impl NewTodo {
    pub fn draft(name: impl Into<String>, date_start: impl Into<String>) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            name: name.into(),
            date_start: date_start.into(),
            finished: false,
        }
    }
}

/// Body of an update request. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TodoPatch {
    /// Only the editable form fields
    pub fn rename(name: impl Into<String>, date_start: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            date_start: Some(date_start.into()),
            ..Default::default()
        }
    }

    /// Every field of `todo`, as received
    pub fn full(todo: &Todo) -> Self {
        Self {
            id: Some(todo.id.clone()),
            name: Some(todo.name.clone()),
            date_start: Some(todo.date_start.clone()),
            finished: Some(todo.finished),
            extra: todo.extra.clone(),
        }
    }

    pub fn with_finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_from_document() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": "6650f1",
            "id": 1716512345678_i64,
            "name": "Buy milk",
            "date_start": "24/05/2024",
            "finished": false,
            "__v": 0
        }))
        .unwrap();

        assert_eq!(todo.id.as_str(), "6650f1");
        assert_eq!(todo.name, "Buy milk");
        assert!(!todo.finished);
        assert_eq!(todo.extra.get("id"), Some(&json!(1716512345678_i64)));
        assert_eq!(todo.extra.get("__v"), Some(&json!(0)));
    }

    #[test]
    fn test_numeric_id() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": 42,
            "name": "x",
            "date_start": "01/01/2024"
        }))
        .unwrap();
        assert_eq!(todo.id, TodoId::new("42"));
        assert!(!todo.finished);
    }

    #[test]
    fn test_list_tolerates_missing_fields() {
        let todos: Vec<Todo> = serde_json::from_value(json!([
            { "_id": "a", "name": "ok", "date_start": "01/01/2024" },
            { "_id": "b", "name": "no date" },
            { "_id": "c", "name": null, "date_start": null, "finished": true },
            { "_id": "d", "name": "unknown state", "date_start": "02/01/2024", "finished": null }
        ]))
        .unwrap();

        assert_eq!(todos.len(), 4);
        assert_eq!(todos[0].date_start, "01/01/2024");
        assert_eq!(todos[1].name, "no date");
        assert!(todos[1].date_start.is_empty());
        assert!(todos[2].name.is_empty());
        assert!(todos[2].date_start.is_empty());
        assert!(todos[2].finished);
        assert!(!todos[3].finished);
    }

    #[test]
    fn test_rename_patch_omits_unset_fields() {
        let body = serde_json::to_value(TodoPatch::rename("Walk", "02/03/2024")).unwrap();
        assert_eq!(body, json!({ "name": "Walk", "date_start": "02/03/2024" }));
    }

    #[test]
    fn test_full_patch_keeps_server_fields() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": "a1",
            "name": "Read",
            "date_start": "05/06/2024",
            "finished": false,
            "createdAt": "2024-06-05T00:00:00Z"
        }))
        .unwrap();

        let body = serde_json::to_value(TodoPatch::full(&todo).with_finished(true)).unwrap();
        assert_eq!(
            body,
            json!({
                "_id": "a1",
                "name": "Read",
                "date_start": "05/06/2024",
                "finished": true,
                "createdAt": "2024-06-05T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_draft_is_unfinished() {
        let draft = NewTodo::draft("Plan trip", "10/10/2024");
        assert!(!draft.finished);
        assert!(draft.id > 0);
    }
}
