//! A `TodoStore` decorator that logs every operation.
//!
//! Each call emits one `tracing` event carrying the operation name, its
//! inputs, the elapsed time and the error (if any). Successful calls log at
//! `info`, failed calls at `warn`.

use std::time::Instant;

use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::Todo;

/// Wraps a store and logs each operation it forwards.
pub struct LoggingStore<S> {
    inner: S,
}

impl<S: TodoStore> LoggingStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

macro_rules! log_outcome {
    ($result:expr, $begin:ident, $($field:tt)*) => {
        match $result {
            Ok(_) => tracing::info!(dur = ?$begin.elapsed(), $($field)*),
            Err(err) => tracing::warn!(dur = ?$begin.elapsed(), err = %err, $($field)*),
        }
    };
}

impl<S: TodoStore> TodoStore for LoggingStore<S> {
    fn create(&self, description: &str) -> Result<(), StoreError> {
        let begin = Instant::now();
        let result = self.inner.create(description);
        log_outcome!(&result, begin, event = "post_create_todo");
        result
    }

    fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let begin = Instant::now();
        let result = self.inner.get(id);
        log_outcome!(&result, begin, event = "get_todo", id);
        result
    }

    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let begin = Instant::now();
        let result = self.inner.list();
        let count = result.as_ref().map_or(0, Vec::len);
        log_outcome!(&result, begin, event = "get_todos", count);
        result
    }

    fn update(&self, id: i64, description: &str) -> Result<(), StoreError> {
        let begin = Instant::now();
        let result = self.inner.update(id, description);
        log_outcome!(&result, begin, event = "put_update_todo", id);
        result
    }

    fn set_completed(&self, id: i64, completed: bool) -> Result<(), StoreError> {
        let begin = Instant::now();
        let result = self.inner.set_completed(id, completed);
        log_outcome!(&result, begin, event = "put_set_todo_completed", id, completed);
        result
    }
}
