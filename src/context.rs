//! Application Context
//!
//! Shares the controller with every component via the Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::controller::TodoController;
use crate::store::TodoStore;

pub type AppController = TodoController<HttpTodoApi, TodoStore>;

/// Copyable handle to the app's controller
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Kept in local storage: the HTTP client stays on the UI thread
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run one controller operation in the background
    pub fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
