//! Response bodies and JSON encoding.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use todo_core::Todo;

const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Serialize)]
pub struct TodosResponse {
    pub todos: Vec<Todo>,
}

/// Acknowledgement for operations that return no payload: `{"error":null}`.
#[derive(Debug, Default, Serialize)]
pub struct Ack {
    pub error: Option<String>,
}

/// Serialize `body` with the given status and a UTF-8 JSON content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to encode response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

macro_rules! ok_json {
    ($($ty:ty),*) => {
        $(impl IntoResponse for $ty {
            fn into_response(self) -> Response {
                json_response(StatusCode::OK, &self)
            }
        })*
    };
}

ok_json!(TodoResponse, TodosResponse, Ack);
