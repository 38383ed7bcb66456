use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::error::AppError;
use crate::models::{Todo, TodoPayload};
use crate::services::todo_service;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ToDos", get(list_todos).post(create_todo))
        .route(
            "/api/ToDos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/ToDos/search/{keyword}", get(search_todos))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = todo_service::list(&state.db).await?;
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = todo_service::get(&state.db, id).await?;
    Ok(Json(todo))
}

async fn search_todos(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = todo_service::search(&state.db, &keyword).await?;
    Ok(Json(todos))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<TodoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let todo = todo_service::create(&state.db, payload).await?;
    let location = format!("/api/ToDos/{}", todo.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<StatusCode, AppError> {
    todo_service::update(&state.db, id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    todo_service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
