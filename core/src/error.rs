//! Errors returned by `TodoStore` operations.
//!
//! # Design
//! `InvalidId` is a caller mistake (a negative id) while `TodoNotFound`
//! reports an id that was never assigned. The HTTP layer maps them to 400 and
//! 404 respectively, so they stay separate variants.

use thiserror::Error;

/// Errors returned by `TodoStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The id was negative.
    #[error("invalid id, must be non-negative")]
    InvalidId,

    /// No todo exists with the given id.
    #[error("todo not found")]
    TodoNotFound,
}
