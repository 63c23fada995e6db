//! In-memory todo store.
//!
//! # Overview
//! `TodoStore` is the set of operations the HTTP layer calls; `InMemoryStore`
//! is the only backing implementation and `LoggingStore` decorates any store
//! with per-operation `tracing` events.
//!
//! # Design
//! - All state (todo map and next-id counter) lives behind one mutex, so the
//!   operations are linearizable.
//! - Ids start at 1, increase by one per `create`, and are never reused.
//! - Callers receive clones of `Todo`, never references into the store.

pub mod error;
pub mod logging;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use logging::LoggingStore;
pub use store::{InMemoryStore, TodoStore};
pub use types::Todo;
