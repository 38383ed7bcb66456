use sqlx::SqlitePool;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{Todo, TodoPayload};

pub async fn list(db: &SqlitePool) -> Result<Vec<Todo>, AppError> {
    Ok(repository::fetch_todos(db).await?)
}

pub async fn get(db: &SqlitePool, id: i64) -> Result<Todo, AppError> {
    repository::find_todo_by_id(db, id)
        .await?
        .ok_or(AppError::NotFound)
}

/// Case-insensitive substring match over the ordered listing. The filter
/// runs here rather than in SQL so LIKE metacharacters in the keyword are
/// matched literally; an empty keyword matches every record.
pub async fn search(db: &SqlitePool, keyword: &str) -> Result<Vec<Todo>, AppError> {
    let keyword = keyword.to_lowercase();
    let todos = repository::fetch_todos(db).await?;

    Ok(todos
        .into_iter()
        .filter(|t| t.name.to_lowercase().contains(&keyword))
        .collect())
}

pub async fn create(db: &SqlitePool, payload: TodoPayload) -> Result<Todo, AppError> {
    // Any id in the body is ignored; the store assigns it.
    let todo = repository::insert_todo(db, &payload.name, payload.is_completed).await?;
    info!("created todo {}", todo.id);
    Ok(todo)
}

pub async fn update(db: &SqlitePool, id: i64, payload: TodoPayload) -> Result<(), AppError> {
    if payload.id != id {
        return Err(AppError::BadRequest(format!(
            "id mismatch: path {} vs body {}",
            id, payload.id
        )));
    }

    let rows = repository::update_todo(db, id, &payload.name, payload.is_completed).await?;
    if rows == 0 {
        // Concurrency check: the record was deleted out from under us, or a
        // concurrent writer holds a newer version. Fail, never merge.
        if repository::todo_exists(db, id).await? {
            return Err(AppError::Conflict(format!(
                "todo {} was modified concurrently",
                id
            )));
        }
        return Err(AppError::NotFound);
    }

    Ok(())
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
    let rows = repository::delete_todo(db, id).await?;
    if rows == 0 {
        return Err(AppError::NotFound);
    }

    info!("deleted todo {}", id);
    Ok(())
}
