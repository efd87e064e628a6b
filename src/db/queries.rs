//! SQL query constants
//!
//! Contains all SQL statements used by the application. Every user-supplied
//! value is a bound parameter; no statement is assembled from request data.

/// Idempotent table bootstrap, safe to run on every startup
pub const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id SERIAL PRIMARY KEY,
        title TEXT,
        status TEXT
    )
"#;

/// List every todo, ascending id order
pub const LIST_TODOS: &str = r#"
    SELECT id, title, status
    FROM todos
    ORDER BY id
"#;

/// Fetch a single todo by id
pub const GET_TODO: &str = r#"
    SELECT id, title, status
    FROM todos
    WHERE id = $1
"#;

/// Insert a todo, yielding the generated id
pub const INSERT_TODO: &str = r#"
    INSERT INTO todos (title, status)
    VALUES ($1, $2)
    RETURNING id
"#;

/// Full update of both mutable columns, yielding the stored row
pub const REPLACE_TODO: &str = r#"
    UPDATE todos
    SET title = $2, status = $3
    WHERE id = $1
    RETURNING id, title, status
"#;

/// Update only the status column
pub const UPDATE_TODO_STATUS: &str = r#"
    UPDATE todos
    SET status = $2
    WHERE id = $1
"#;

/// Update only the title column
pub const UPDATE_TODO_TITLE: &str = r#"
    UPDATE todos
    SET title = $2
    WHERE id = $1
"#;

/// Delete a todo by id
pub const DELETE_TODO: &str = r#"
    DELETE FROM todos
    WHERE id = $1
"#;
