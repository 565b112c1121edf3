//! HTTP Todo API
//!
//! reqwest client against the configured base path. Uses the browser's fetch
//! when compiled to wasm.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ApiError, TodoApi};
use crate::config::AppConfig;
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base: Url,
}

impl HttpTodoApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base: config.api_base.clone(),
        }
    }

    /// Base path plus one percent-encoded segment. `""` yields the trailing-slash root.
    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T, ApiError> {
        let response = self.send(request, url).await?;
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let url = self.endpoint("");
        tracing::debug!(%url, "GET todos");
        self.fetch(self.client.get(url.clone()), &url).await
    }

    async fn search(&self, name: &str) -> Result<Vec<Todo>, ApiError> {
        let mut url = self.endpoint("search");
        url.query_pairs_mut().append_pair("name", name);
        tracing::debug!(%url, "GET search");
        self.fetch(self.client.get(url.clone()), &url).await
    }

    async fn create(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        let url = self.endpoint("");
        tracing::debug!(%url, name = %todo.name, "POST todo");
        self.fetch(self.client.post(url.clone()).json(todo), &url).await
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<(), ApiError> {
        let url = self.endpoint(id.as_str());
        tracing::debug!(%url, "PUT todo");
        self.send(self.client.put(url.clone()).json(patch), &url).await?;
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        let url = self.endpoint(id.as_str());
        tracing::debug!(%url, "DELETE todo");
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn api(base: &str) -> HttpTodoApi {
        HttpTodoApi::new(&AppConfig::with_api_base(base).unwrap())
    }

    #[test]
    fn test_root_endpoint_has_trailing_slash() {
        let nested = api("http://localhost:3000/todos");
        assert_eq!(nested.endpoint("").as_str(), "http://localhost:3000/todos/");
        let bare = api("http://localhost:3000");
        assert_eq!(bare.endpoint("").as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_id_endpoint() {
        let api = api("http://localhost:3000/todos/");
        assert_eq!(api.endpoint("6650f1").as_str(), "http://localhost:3000/todos/6650f1");
        assert_eq!(api.endpoint("a/b").as_str(), "http://localhost:3000/todos/a%2Fb");
    }

    #[test]
    fn test_search_query_is_encoded() {
        let mut url = api("http://localhost:3000/todos").endpoint("search");
        url.query_pairs_mut().append_pair("name", "ซื้อ นม");
        assert!(url.as_str().starts_with("http://localhost:3000/todos/search?name="));
        assert!(!url.as_str().contains(' '));
    }

    /// Answer one request with `response`; the handle yields the raw request.
    async fn serve_once(response: &'static str) -> (HttpTodoApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (key, value) = line.split_once(':')?;
                            key.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (api(&format!("http://{addr}/todos")), handle)
    }

    #[tokio::test]
    async fn test_update_accepts_empty_response() {
        let (api, server) =
            serve_once("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n").await;

        let patch = TodoPatch::rename("Walk", "02/03/2024");
        api.update(&TodoId::new("a1"), &patch).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /todos/a1 "));
        assert!(request.contains(r#""name":"Walk""#));
    }

    #[tokio::test]
    async fn test_update_accepts_non_todo_body() {
        let (api, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 7\r\n\
             Connection: close\r\n\r\nUpdated",
        )
        .await;

        let patch = TodoPatch::rename("Walk", "02/03/2024");
        assert!(api.update(&TodoId::new("a1"), &patch).await.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_update_error_status() {
        let (api, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\
             Connection: close\r\n\r\n",
        )
        .await;

        let err = api
            .update(&TodoId::new("a1"), &TodoPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        server.await.unwrap();
    }
}
