//! SQLite TodoRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::db::{DbResult, Id, Todo, TodoRepository};

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TodoRepository for SqliteTodoRepository<'a> {
    async fn insert(&self, title: &str, completed: bool) -> DbResult<Todo> {
        let row = sqlx::query(
            "INSERT INTO todo (title, completed) VALUES (?, ?) RETURNING id, title, completed",
        )
        .bind(title)
        .bind(completed)
        .fetch_one(self.pool)
        .await?;

        let todo = row_to_todo(&row);
        debug!(id = todo.id, "Inserted todo");
        Ok(todo)
    }

    async fn list_all(&self) -> DbResult<Vec<Todo>> {
        let rows = sqlx::query("SELECT id, title, completed FROM todo ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    async fn list_by_completion(&self, completed: bool) -> DbResult<Vec<Todo>> {
        let rows = sqlx::query(
            "SELECT id, title, completed FROM todo WHERE completed = ? ORDER BY id ASC",
        )
        .bind(completed)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    async fn get_by_id(&self, id: Id) -> DbResult<Option<Todo>> {
        let row = sqlx::query("SELECT id, title, completed FROM todo WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_todo))
    }

    async fn update(&self, id: Id, title: &str, completed: bool) -> DbResult<Option<Todo>> {
        // Existence check and write in one statement
        let row = sqlx::query(
            "UPDATE todo SET title = ?, completed = ? WHERE id = ? RETURNING id, title, completed",
        )
        .bind(title)
        .bind(completed)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        if row.is_none() {
            debug!(id, "Update matched no todo");
        }
        Ok(row.as_ref().map(row_to_todo))
    }

    async fn delete_by_id(&self, id: Id) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_where_completed(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM todo WHERE completed = 1")
            .execute(self.pool)
            .await?;

        debug!(deleted = result.rows_affected(), "Cleared completed todos");
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM todo").execute(self.pool).await?;

        debug!(deleted = result.rows_affected(), "Cleared all todos");
        Ok(result.rows_affected())
    }
}

fn row_to_todo(row: &SqliteRow) -> Todo {
    Todo {
        id: row.get("id"),
        title: row.get("title"),
        completed: row.get("completed"),
    }
}
