// Database service for todo operations
//
// The persistence gateway: owns the pool handed out by AppState and executes
// one statement per call. NULL coercion happens here and nowhere else.

use crate::db::queries;
use crate::error::AppError;
use crate::models::Todo;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

// Todo record as stored; title and status are nullable columns
#[derive(Clone, Debug)]
pub struct DbTodo {
    pub id: i32,
    pub title: Option<String>,
    pub status: Option<String>,
}

// NULL columns surface as empty strings, never as null
impl From<DbTodo> for Todo {
    fn from(record: DbTodo) -> Self {
        Self {
            id: record.id,
            title: record.title.unwrap_or_default(),
            status: record.status.unwrap_or_default(),
        }
    }
}

fn row_to_todo(row: &Row) -> Todo {
    Todo::from(DbTodo {
        id: row.get("id"),
        title: row.get("title"),
        status: row.get("status"),
    })
}

// Todo service for database operations
pub struct TodoService {
    pool: Pool,
}

impl TodoService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    // Fetch every todo, ordered by ascending id
    pub async fn list_all(&self) -> Result<Vec<Todo>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(queries::LIST_TODOS, &[]).await?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    // Fetch a single todo by id
    pub async fn get_by_id(&self, id: i32) -> Result<Todo, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(queries::GET_TODO, &[&id])
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Todo {} not found", id)))?;

        Ok(row_to_todo(&row))
    }

    // Insert a new todo and return the generated id
    pub async fn insert(
        &self,
        title: Option<&str>,
        status: Option<&str>,
    ) -> Result<i32, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(queries::INSERT_TODO, &[&title, &status])
            .await?;

        Ok(row.get("id"))
    }

    // Replace both mutable columns, returning the row as stored
    pub async fn replace(
        &self,
        id: i32,
        title: Option<&str>,
        status: Option<&str>,
    ) -> Result<Todo, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(queries::REPLACE_TODO, &[&id, &title, &status])
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Todo {} not found", id)))?;

        Ok(row_to_todo(&row))
    }

    // Update only the status column
    pub async fn update_status(&self, id: i32, status: Option<&str>) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        let rows_affected = client
            .execute(queries::UPDATE_TODO_STATUS, &[&id, &status])
            .await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("Todo {} not found", id)));
        }

        Ok(())
    }

    // Update only the title column
    pub async fn update_title(&self, id: i32, title: Option<&str>) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        let rows_affected = client
            .execute(queries::UPDATE_TODO_TITLE, &[&id, &title])
            .await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("Todo {} not found", id)));
        }

        Ok(())
    }

    // Delete a todo by id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        let rows_affected = client.execute(queries::DELETE_TODO, &[&id]).await?;

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("Todo {} not found", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_columns_become_empty_strings() {
        let todo = Todo::from(DbTodo {
            id: 3,
            title: None,
            status: None,
        });

        assert_eq!(
            todo,
            Todo {
                id: 3,
                title: String::new(),
                status: String::new(),
            }
        );
    }

    #[test]
    fn present_columns_pass_through() {
        let todo = Todo::from(DbTodo {
            id: 1,
            title: Some("Buy milk".to_string()),
            status: Some("pending".to_string()),
        });

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.status, "pending");
    }
}
