//! Data layer for the mobile UI.
//!
//! `TodoApi` is the seam the view models depend on (`Arc<dyn TodoApi>`), so
//! screens can be driven by a fake in tests; `TodoApiClient` is the reqwest
//! implementation talking to the ToDo API. Failures come back as
//! `ClientError` values with a displayable message, never a panic.

pub mod api;
pub mod error;
pub mod model;

pub use api::{TodoApi, TodoApiClient};
pub use error::ClientError;
pub use model::{NewTodo, Todo};
