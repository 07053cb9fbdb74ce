//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a path prefix and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! Built paths are origin-relative (default prefix `/api`, so
//! `/api/todos`). The client never hardcodes a host, which keeps it
//! deployable behind any origin or proxy.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoStats, UpdateTodo};

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    prefix: String,
}

impl TodoClient {
    /// Client rooted at `prefix` (for example `"/api"` or `""` for the
    /// canonical mount). A trailing slash is stripped and a missing
    /// leading slash is added.
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim_end_matches('/');
        let prefix = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { prefix }
    }

    pub fn build_list_todos(&self, filter: Option<bool>) -> HttpRequest {
        let path = match filter {
            Some(completed) => format!("{}/todos?completed={completed}", self.prefix),
            None => format!("{}/todos", self.prefix),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{id}", self.prefix),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.prefix),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Toggle carries no body: the server inverts the stored flag, so the
    /// client does not (and must not) send the value it expects.
    pub fn build_toggle_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todos/{id}/toggle", self.prefix),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{id}", self.prefix),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.prefix),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_stats(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/stats", self.prefix),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The server confirms a delete by echoing the removed todo.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_stats(&self, response: HttpResponse) -> Result<TodoStats, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new("/api")
    }
}

/// Server error envelope: every 4xx body is `{"error": message}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::Validation(error_message(&response.body))),
        _ => Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}

/// Pull the message out of an `{"error": ...}` body, falling back to the
/// raw body when the envelope is missing.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::default()
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos(None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_todos_encodes_filter() {
        let req = client().build_list_todos(Some(true));
        assert_eq!(req.path, "/api/todos?completed=true");

        let req = client().build_list_todos(Some(false));
        assert_eq!(req.path, "/api/todos?completed=false");
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(3);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/api/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
    }

    #[test]
    fn build_toggle_todo_is_patch_without_body() {
        let req = client().build_toggle_todo(5);
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "/api/todos/5/toggle");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_todo_produces_correct_request() {
        let input = UpdateTodo {
            title: Some("Updated".to_string()),
            completed: None,
        };
        let req = client().build_update_todo(2, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/api/todos/2");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert!(body.get("completed").is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(4);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "/api/todos/4");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_stats_produces_correct_request() {
        let req = client().build_stats();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/api/todos/stats");
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"title":"Test","completed":false}]"#.to_string(),
        };
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title, "Test");
    }

    #[test]
    fn parse_get_todo_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"error":"Todo not found"}"#.to_string(),
        };
        let err = client().parse_get_todo(response).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_create_todo_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1,"title":"New","completed":false}"#.to_string(),
        };
        let todo = client().parse_create_todo(response).unwrap();
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_create_todo_validation_message_from_body() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"error":"Title is required"}"#.to_string(),
        };
        let err = client().parse_create_todo(response).unwrap_err();
        assert_eq!(err, ApiError::Validation("Title is required".to_string()));
    }

    #[test]
    fn parse_validation_falls_back_to_raw_body() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: "bad request".to_string(),
        };
        let err = client().parse_create_todo(response).unwrap_err();
        assert_eq!(err, ApiError::Validation("bad request".to_string()));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_toggle_todo_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":1,"title":"Flipped","completed":true}"#.to_string(),
        };
        let todo = client().parse_toggle_todo(response).unwrap();
        assert!(todo.completed);
    }

    #[test]
    fn parse_delete_todo_returns_removed_record() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":9,"title":"Gone","completed":false}"#.to_string(),
        };
        let removed = client().parse_delete_todo(response).unwrap();
        assert_eq!(removed.id, 9);
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"error":"Todo not found"}"#.to_string(),
        };
        let err = client().parse_delete_todo(response).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_stats_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"itemsLeft":2,"completedCount":2}"#.to_string(),
        };
        let stats = client().parse_stats(response).unwrap();
        assert_eq!(stats.items_left, 2);
        assert_eq!(stats.completed_count, 2);
    }

    #[test]
    fn prefix_is_normalized() {
        let client = TodoClient::new("/api/");
        assert_eq!(client.build_list_todos(None).path, "/api/todos");

        let client = TodoClient::new("api");
        assert_eq!(client.build_list_todos(None).path, "/api/todos");

        let client = TodoClient::new("");
        assert_eq!(client.build_list_todos(None).path, "/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
