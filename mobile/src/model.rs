use serde::{Deserialize, Serialize};

// Each tier declares its own wire model, mirroring the backend's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub is_completed: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub name: String,
    pub is_completed: bool,
}
