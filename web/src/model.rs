use serde::{Deserialize, Serialize};

/// Wire shape of a ToDo record. Declared here rather than shared with the
/// backend crate so each tier owns its model; integration tests catch drift.
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
