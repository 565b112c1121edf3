//! Todo List App
//!
//! Root component: builds the store and controller, fetches the list on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{TodoForm, TodoTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env().unwrap_or_else(|err| {
        tracing::error!(error = %err, "falling back to default API base");
        AppConfig::default()
    });
    tracing::info!(api_base = %config.api_base, "todo API configured");

    let store = Store::new(TodoState::default());
    let ctx = AppContext::new(TodoController::new(HttpTodoApi::new(&config), store));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        ctx.run(|controller| async move { controller.list().await });
    });

    view! {
        <main class="todo-page">
            <h2>"Todo List"</h2>
            <TodoForm />
            <TodoTable />
        </main>
    }
}
