use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Todo;

// RFC 3339 strings compare lexicographically, so created_at DESC is
// newest-first; id DESC breaks ties between same-instant inserts.
pub async fn fetch_todos(db: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, name, is_completed, created_at FROM todos ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(db)
    .await
}

pub async fn find_todo_by_id(db: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>("SELECT id, name, is_completed, created_at FROM todos WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn insert_todo(
    db: &SqlitePool,
    name: &str,
    is_completed: bool,
) -> Result<Todo, sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    let result = sqlx::query("INSERT INTO todos (name, is_completed, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(is_completed)
        .bind(&now)
        .execute(db)
        .await?;

    Ok(Todo {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        is_completed,
        created_at: now,
    })
}

pub async fn update_todo(
    db: &SqlitePool,
    id: i64,
    name: &str,
    is_completed: bool,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE todos SET name = ?, is_completed = ? WHERE id = ?")
        .bind(name)
        .bind(is_completed)
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_todo(db: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn todo_exists(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let (exists,): (i64,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await?;

    Ok(exists != 0)
}
