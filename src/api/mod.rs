//! Todo API
//!
//! The five backend operations behind one trait, so the controller can run
//! against the HTTP client in the browser and an in-memory fake in tests.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

pub use http::HttpTodoApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unreadable response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Backend operations. Futures are `!Send`: everything runs on the UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /`
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;

    /// `GET /search?name=<name>`
    async fn search(&self, name: &str) -> Result<Vec<Todo>, ApiError>;

    /// `POST /`
    async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError>;

    /// `PUT /:id`. The response body is not read.
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<(), ApiError>;

    /// `DELETE /:id`
    async fn delete(&self, id: &TodoId) -> Result<(), ApiError>;
}
