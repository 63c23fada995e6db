//! HTTP front end for the todo store.
//!
//! # Routes
//! - `GET  /api/v1/todos` → `{"todos":[...]}`
//! - `POST /api/v1/todos` with `{"description": ...}` → `{"error":null}`
//! - `GET  /api/v1/todos/{id}` → `{"todo":{...}}`
//! - `PUT  /api/v1/todos/{id}` with `{"description": ...}` → `{"error":null}`
//! - `PUT  /api/v1/todos/{id}/status` with `{"completed": ...}` → `{"error":null}`
//!
//! Errors are `{"error": "<message>"}` with the status chosen by
//! [`ApiError::status`].

pub mod config;
pub mod error;
pub mod request;
pub mod response;

use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use todo_core::TodoStore;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
use request::{
    ensure_no_params, CreateTodoRequest, SetCompletedStatusRequest, TodoId, UpdateTodoRequest,
};
use response::{Ack, TodoResponse, TodosResponse};

/// The store shared by every request task.
pub type SharedStore = Arc<dyn TodoStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/api/v1/todos", get(list_todos).post(create_todo))
        .route("/api/v1/todos/{id}", get(get_todo).put(update_todo))
        .route("/api/v1/todos/{id}/status", put(set_completed_status))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(
    State(store): State<SharedStore>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<TodosResponse, ApiError> {
    ensure_no_params(query.as_deref(), &body)?;
    let todos = store.list()?;
    Ok(TodosResponse { todos })
}

async fn get_todo(
    State(store): State<SharedStore>,
    TodoId(id): TodoId,
) -> Result<TodoResponse, ApiError> {
    let todo = store.get(id)?;
    Ok(TodoResponse { todo })
}

async fn create_todo(State(store): State<SharedStore>, body: Bytes) -> Result<Ack, ApiError> {
    let req = CreateTodoRequest::decode(&body)?;
    store.create(&req.description)?;
    Ok(Ack::default())
}

async fn update_todo(
    State(store): State<SharedStore>,
    id: TodoId,
    body: Bytes,
) -> Result<Ack, ApiError> {
    let req = UpdateTodoRequest::decode(id, &body)?;
    store.update(req.id, &req.description)?;
    Ok(Ack::default())
}

async fn set_completed_status(
    State(store): State<SharedStore>,
    id: TodoId,
    body: Bytes,
) -> Result<Ack, ApiError> {
    let req = SetCompletedStatusRequest::decode(id, &body)?;
    store.set_completed(req.id, req.completed)?;
    Ok(Ack::default())
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
