//! The `TodoStore` capability and its in-memory implementation.
//!
//! # Design
//! `InMemoryStore` keeps the todo map and the next-id counter in one struct
//! behind a single `parking_lot::Mutex`. Every operation holds the lock for
//! its full duration, so all operations are totally ordered by lock
//! acquisition. Values handed out are clones; nothing outside the store can
//! reach its map.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::types::Todo;

/// Operations over the authoritative todo collection.
///
/// Implementations must be safe to share across request tasks. Decorators
/// such as `LoggingStore` implement this trait by delegating to an inner store.
pub trait TodoStore: Send + Sync {
    /// Create a todo with the next id. New todos start incomplete.
    fn create(&self, description: &str) -> Result<(), StoreError>;

    /// Fetch a todo by id.
    ///
    /// Fails with `InvalidId` for negative ids. An id that was never assigned
    /// yields `Todo::default()` rather than an error.
    fn get(&self, id: i64) -> Result<Todo, StoreError>;

    /// All todos, ascending by id.
    fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Replace a todo's description, leaving `completed` untouched.
    fn update(&self, id: i64, description: &str) -> Result<(), StoreError>;

    /// Set a todo's completed flag, leaving the description untouched.
    fn set_completed(&self, id: i64, completed: bool) -> Result<(), StoreError>;
}

struct State {
    next_id: i64,
    todos: HashMap<i64, Todo>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// `TodoStore` backed by a `HashMap` guarded by one mutex.
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                todos: HashMap::new(),
            }),
        }
    }
}

impl TodoStore for InMemoryStore {
    fn create(&self, description: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        let id = state.next_id();
        state.todos.insert(id, Todo::new(id, description.to_string()));
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Todo, StoreError> {
        if id < 0 {
            return Err(StoreError::InvalidId);
        }
        let state = self.state.lock();
        Ok(state.todos.get(&id).cloned().unwrap_or_default())
    }

    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let state = self.state.lock();
        let mut todos: Vec<Todo> = state.todos.values().cloned().collect();
        todos.sort_unstable_by_key(|todo| todo.id);
        Ok(todos)
    }

    fn update(&self, id: i64, description: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        let todo = state.todos.get_mut(&id).ok_or(StoreError::TodoNotFound)?;
        todo.description = description.to_string();
        Ok(())
    }

    fn set_completed(&self, id: i64, completed: bool) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        let todo = state.todos.get_mut(&id).ok_or(StoreError::TodoNotFound)?;
        todo.completed = completed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn store_with(descriptions: &[&str]) -> InMemoryStore {
        let store = InMemoryStore::new();
        for description in descriptions {
            store.create(description).unwrap();
        }
        store
    }

    fn todo(id: i64, description: &str, completed: bool) -> Todo {
        Todo {
            id,
            description: description.to_string(),
            completed,
        }
    }

    // --- get ---

    #[rstest]
    #[case::successful_lookup(&["do this task"], 1, Ok(todo(1, "do this task", false)))]
    #[case::invalid_id(&[], -1, Err(StoreError::InvalidId))]
    #[case::unassigned_id(&["do this task"], 2, Ok(Todo::default()))]
    #[case::zero_id(&["do this task"], 0, Ok(Todo::default()))]
    fn get_cases(
        #[case] descriptions: &[&str],
        #[case] id: i64,
        #[case] expected: Result<Todo, StoreError>,
    ) {
        let store = store_with(descriptions);
        assert_eq!(store.get(id), expected);
    }

    #[test]
    fn get_unassigned_is_idempotent() {
        let store = store_with(&["a"]);
        assert_eq!(store.get(42).unwrap(), store.get(42).unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    // --- list ---

    #[rstest]
    #[case::no_items(&[])]
    #[case::single_item(&["desc 1"])]
    #[case::multiple_items(&["desc 1", "desc 2", "desc 3"])]
    fn list_returns_all_in_id_order(#[case] descriptions: &[&str]) {
        let store = store_with(descriptions);
        let expected: Vec<Todo> = descriptions
            .iter()
            .zip(1..)
            .map(|(description, id)| todo(id, description, false))
            .collect();
        assert_eq!(store.list().unwrap(), expected);
    }

    #[test]
    fn list_stays_sorted_after_updates() {
        let store = store_with(&["a", "b", "c", "d", "e"]);
        store.update(3, "c2").unwrap();
        store.set_completed(1, true).unwrap();
        store.update(5, "e2").unwrap();

        let ids: Vec<i64> = store.list().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    // --- create ---

    #[test]
    fn ids_start_at_one_and_increase_without_gaps() {
        let store = InMemoryStore::new();
        for expected in 1..=20 {
            store.create("task").unwrap();
            assert_eq!(store.get(expected).unwrap().id, expected);
        }
    }

    #[test]
    fn create_accepts_empty_description() {
        let store = store_with(&[""]);
        assert_eq!(store.get(1).unwrap(), todo(1, "", false));
    }

    // --- update ---

    #[rstest]
    #[case::successful_update(1, Ok(()))]
    #[case::todo_not_found(2, Err(StoreError::TodoNotFound))]
    #[case::negative_id(-1, Err(StoreError::TodoNotFound))]
    fn update_cases(#[case] id: i64, #[case] expected: Result<(), StoreError>) {
        let store = store_with(&["foo desc"]);
        assert_eq!(store.update(id, "bar desc"), expected);
    }

    #[test]
    fn update_keeps_completed_flag() {
        let store = store_with(&["foo desc"]);
        store.set_completed(1, true).unwrap();
        store.update(1, "bar desc").unwrap();
        assert_eq!(store.get(1).unwrap(), todo(1, "bar desc", true));
    }

    // --- set_completed ---

    #[test]
    fn set_completed_keeps_description() {
        let store = store_with(&["foo desc"]);
        store.set_completed(1, true).unwrap();
        assert_eq!(store.get(1).unwrap(), todo(1, "foo desc", true));
        store.set_completed(1, false).unwrap();
        assert_eq!(store.get(1).unwrap(), todo(1, "foo desc", false));
    }

    #[test]
    fn set_completed_unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        assert_eq!(store.set_completed(1, true), Err(StoreError::TodoNotFound));
    }

    #[test]
    fn buy_milk_scenario() {
        let store = InMemoryStore::new();
        store.create("buy milk").unwrap();
        assert_eq!(store.get(1).unwrap(), todo(1, "buy milk", false));

        store.set_completed(1, true).unwrap();
        assert_eq!(store.get(1).unwrap(), todo(1, "buy milk", true));

        assert_eq!(store.update(99, "x"), Err(StoreError::TodoNotFound));
    }
}
