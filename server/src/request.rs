//! Typed request values decoded from raw HTTP.
//!
//! # Design
//! Bodies are taken as raw bytes and decoded here with `serde_json` instead
//! of axum's `Json` extractor, so a malformed body is an `ApiError::Decode`
//! whatever the `Content-Type` header says. Only the first JSON value of a
//! body is read, missing fields take their zero value, and capitalized field
//! names are accepted. The `{id}` path segment must be all ASCII digits;
//! anything else is treated as an unmatched route.

use std::io;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// The `{id}` path segment of a todo route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRouting)?;
        parse_id(&raw).map(TodoId)
    }
}

/// Parse an id path segment matching `[0-9]+`.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    Ok(raw.parse::<i64>()?)
}

/// Listing takes no parameters; reject a query string or a body.
pub fn ensure_no_params(query: Option<&str>, body: &[u8]) -> Result<(), ApiError> {
    if query.is_some_and(|q| !q.is_empty()) || !body.is_empty() {
        return Err(ApiError::BadRouting);
    }
    Ok(())
}

/// Decode the first JSON value in `body`, ignoring anything after it.
fn decode_first<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => Ok(value?),
        None => Err(serde_json::Error::io(io::ErrorKind::UnexpectedEof.into()).into()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, alias = "Description")]
    pub description: String,
}

impl CreateTodoRequest {
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        decode_first(body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    pub id: i64,
    pub description: String,
}

impl UpdateTodoRequest {
    pub fn decode(id: TodoId, body: &[u8]) -> Result<Self, ApiError> {
        let CreateTodoRequest { description } = CreateTodoRequest::decode(body)?;
        Ok(Self { id: id.0, description })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCompletedStatusRequest {
    pub id: i64,
    pub completed: bool,
}

#[derive(Deserialize)]
struct CompletedBody {
    #[serde(default, alias = "Completed")]
    completed: bool,
}

impl SetCompletedStatusRequest {
    pub fn decode(id: TodoId, body: &[u8]) -> Result<Self, ApiError> {
        let CompletedBody { completed } = decode_first(body)?;
        Ok(Self { id: id.0, completed })
    }
}
