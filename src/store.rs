//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The transitions
//! on `TodoState` are plain methods so they can be tested without a runtime.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};

/// UI state: the fetched list plus the add/edit form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// Items currently shown (full list or last search result)
    pub todos: Vec<Todo>,
    /// Name field, also the live search text
    pub name: String,
    /// Start date field, `DD/MM/YYYY` or empty
    pub date_start: String,
    /// Item being edited; `None` means the form creates
    pub edit_target: Option<TodoId>,
}

impl TodoState {
    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Form contents if both fields are filled
    pub fn submission(&self) -> Option<(String, String)> {
        if self.name.is_empty() || self.date_start.is_empty() {
            return None;
        }
        Some((self.name.clone(), self.date_start.clone()))
    }

    pub fn begin_edit(&mut self, todo: &Todo) {
        self.name = todo.name.clone();
        self.date_start = todo.date_start.clone();
        self.edit_target = Some(todo.id.clone());
    }

    /// Rename the matching item in place
    pub fn apply_edit(&mut self, id: &TodoId, name: &str, date_start: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| &todo.id == id) {
            todo.name = name.to_string();
            todo.date_start = date_start.to_string();
        }
    }

    pub fn toggle_local(&mut self, id: &TodoId) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| &todo.id == id) {
            todo.finished = !todo.finished;
        }
    }

    pub fn clear_form(&mut self) {
        self.name.clear();
        self.date_start.clear();
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Where the controller keeps `TodoState`.
///
/// Implemented by the reactive store in the app and by a plain `RefCell` in tests.
/// Callers must not hold a borrow across an `.await`; both methods take closures.
pub trait StateCell: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut TodoState));
}

impl StateCell for TodoStore {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut TodoState)) {
        self.update(f);
    }
}

impl StateCell for Rc<RefCell<TodoState>> {
    fn read<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut self.borrow_mut());
    }
}
