use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub is_completed: bool,
    pub created_at: String,
}

/// Inbound body for create and update. `created_at` is never
/// client-writable, so it has no field here; serde drops it on the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}
