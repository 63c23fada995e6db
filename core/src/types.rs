//! Domain types for the todo store.
//!
//! # Design
//! Field names on the wire are `ID`, `Description` and `Completed`; the Rust
//! fields stay snake_case and serde renames them. `Default` is the zero value
//! returned by `TodoStore::get` for an id that was never assigned.

use serde::Serialize;

/// A single todo item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Todo {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Completed")]
    pub completed: bool,
}

impl Todo {
    pub(crate) fn new(id: i64, description: String) -> Self {
        Self {
            id,
            description,
            completed: false,
        }
    }
}
