//! Todo Controller
//!
//! One method per user gesture. Every backend failure is logged and
//! swallowed; the UI keeps whatever state it had.

use crate::api::TodoApi;
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};
use crate::store::{StateCell, TodoState};

#[derive(Clone)]
pub struct TodoController<A, S> {
    api: A,
    state: S,
}

impl<A, S> TodoController<A, S>
where
    A: TodoApi + Clone + 'static,
    S: StateCell,
{
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    #[cfg(test)]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replace the list with the server's full collection
    pub async fn list(&self) {
        match self.api.list().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "loaded todos");
                self.state.write(|state| state.todos = todos);
            }
            Err(err) => tracing::error!(error = %err, "listing todos failed"),
        }
    }

    /// Submit the form: update the edit target, or create a new item
    pub async fn add_or_update(&self) {
        let Some((name, date_start)) = self.state.read(TodoState::submission) else {
            return;
        };

        match self.state.read(|state| state.edit_target.clone()) {
            Some(id) => {
                self.state.write(|state| state.apply_edit(&id, &name, &date_start));
                let patch = TodoPatch::rename(&name, &date_start);
                if let Err(err) = self.api.update(&id, &patch).await {
                    tracing::error!(error = %err, id = %id, "updating todo failed");
                }
                self.state.write(|state| state.edit_target = None);
            }
            None => {
                // The draft's temporary id is never matched up with the server's.
                let draft = NewTodo::draft(name, date_start);
                match self.api.create(&draft).await {
                    Ok(created) => {
                        tracing::info!(id = %created.id, "todo saved");
                        self.state.write(|state| state.todos.push(created));
                    }
                    Err(err) => tracing::error!(error = %err, "creating todo failed"),
                }
            }
        }

        self.state.write(TodoState::clear_form);
    }

    /// Load `todo` into the form and switch to edit mode
    pub fn edit(&self, todo: &Todo) {
        self.state.write(|state| state.begin_edit(todo));
    }

    pub async fn delete(&self, id: &TodoId) {
        if let Err(err) = self.api.delete(id).await {
            tracing::error!(error = %err, id = %id, "deleting todo failed");
        }
        self.list().await;
    }

    pub async fn toggle_finished(&self, id: &TodoId) {
        let Some(before) = self.state.read(|state| state.find(id).cloned()) else {
            return;
        };
        self.state.write(|state| state.toggle_local(id));

        let patch = TodoPatch::full(&before).with_finished(!before.finished);
        if let Err(err) = self.api.update(id, &patch).await {
            tracing::error!(error = %err, id = %id, "toggling todo failed");
        }
        self.list().await;
    }

    /// Name-field keystroke: keep the text and show the matching items.
    ///
    /// Responses are applied in arrival order, so a slow earlier search can
    /// overwrite a later one.
    pub async fn search(&self, query: String) {
        self.state.write(|state| state.name = query.clone());
        match self.api.search(&query).await {
            Ok(found) => {
                tracing::debug!(query = %query, count = found.len(), "search results");
                self.state.write(|state| state.todos = found);
            }
            Err(err) => tracing::error!(error = %err, query = %query, "searching todos failed"),
        }
    }
}
