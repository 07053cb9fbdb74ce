//! HTTP resource layer for the todo service.
//!
//! # Design
//! Every handler is a thin adapter: one `TodoService` call, one response.
//! State is a fresh store/service pair per [`app`] call behind
//! `Arc<RwLock<_>>`: reads take the read lock, mutations take the write
//! lock, so mutations are fully serialized and the id-uniqueness and stats
//! invariants hold under concurrent requests. The resource router is also
//! nested under `/api`, matching the relative-path convention clients use
//! behind a proxy.

pub mod error;
pub mod service;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use error::TodoError;
pub use service::TodoService;
pub use store::TodoStore;
pub use types::{Todo, TodoPatch, TodoStats};

/// Shared handle to the service; one per [`app`] instance.
pub type SharedService = Arc<RwLock<TodoService>>;

/// Request body for `POST /todos`. The title is optional at the wire level
/// so a missing field reports the same validation error as a blank one.
#[derive(Debug, Deserialize)]
pub struct CreateTodoBody {
    pub title: Option<String>,
}

/// Query parameters for `GET /todos`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub completed: Option<bool>,
}

/// Build the router with its own fresh, independent store.
pub fn app() -> Router {
    let service: SharedService = Arc::new(RwLock::new(TodoService::new(TodoStore::new())));
    let resource = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/stats", get(todo_stats))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/toggle", patch(toggle_todo));
    Router::new()
        .merge(resource.clone())
        .nest("/api", resource)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(
    State(service): State<SharedService>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Todo>> {
    Json(service.read().await.list(query.completed))
}

async fn create_todo(
    State(service): State<SharedService>,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = service
        .write()
        .await
        .create(body.title.as_deref().unwrap_or(""))?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, TodoError> {
    service.read().await.get(id).map(Json)
}

async fn toggle_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, TodoError> {
    let todo = service.write().await.toggle(id)?;
    tracing::debug!(id, completed = todo.completed, "toggled todo");
    Ok(Json(todo))
}

async fn update_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, TodoError> {
    let todo = service.write().await.update(id, patch)?;
    tracing::debug!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(service): State<SharedService>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, TodoError> {
    let removed = service.write().await.delete(id)?;
    tracing::debug!(id, "deleted todo");
    Ok(Json(removed))
}

async fn todo_stats(State(service): State<SharedService>) -> Json<TodoStats> {
    Json(service.read().await.stats())
}
