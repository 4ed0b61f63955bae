//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the handler layer.
//! Methods return `Send` futures so generic axum handlers stay `Send`.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, Todo},
};

/// Repository for Todo operations.
///
/// Implementations do no validation: callers supply well-formed values.
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo under a freshly assigned ID.
    fn insert(&self, title: &str, completed: bool) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Every todo, in insertion order.
    fn list_all(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Todos whose `completed` flag matches, in insertion order.
    fn list_by_completion(
        &self,
        completed: bool,
    ) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Get a todo by ID.
    fn get_by_id(&self, id: Id) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Replace title and completion of an existing todo.
    ///
    /// Returns `None` when no todo has this ID.
    fn update(
        &self,
        id: Id,
        title: &str,
        completed: bool,
    ) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Delete a todo by ID. Returns whether a row was removed.
    fn delete_by_id(&self, id: Id) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete every completed todo, returning how many were removed.
    fn delete_where_completed(&self) -> impl Future<Output = DbResult<u64>> + Send;

    /// Delete every todo, returning how many were removed.
    fn delete_all(&self) -> impl Future<Output = DbResult<u64>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository
    where
        Self: 'a;

    /// Run pending migrations.
    ///
    /// Blocks the calling worker thread, so it needs a multi-threaded runtime.
    fn migrate(&self) -> DbResult<()>;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
