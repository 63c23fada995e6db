//! Errors surfaced by the HTTP layer and their status codes.
//!
//! # Design
//! Store errors pass through unchanged and decide their own status: a
//! negative id is the caller's fault (400) and an unknown id is 404.
//! Everything else, including undecodable bodies, is reported as 500.

use std::num::ParseIntError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use todo_core::StoreError;

use crate::response::json_response;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body was not valid JSON for the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The id path segment was numeric but out of range.
    #[error(transparent)]
    InvalidPathId(#[from] ParseIntError),

    /// The request carried parameters the route does not accept.
    #[error("bad routing")]
    BadRouting,

    /// No route matched the path.
    #[error("not found")]
    RouteNotFound,

    /// The path matched but the method did not.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::InvalidId) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::TodoNotFound) | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Decode(_) | ApiError::InvalidPathId(_) | ApiError::BadRouting => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(
            self.status(),
            &ErrorBody {
                error: self.to_string(),
            },
        )
    }
}
