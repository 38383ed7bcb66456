//! HTTP service consumed by the server-rendered web UI.
//!
//! A thin caller of the ToDo API: builds requests against its routes,
//! deserializes JSON bodies, and turns every HTTP or transport failure into
//! a `ClientError` value the presentation layer can show. No retries, no
//! state beyond the injected base URL.

pub mod client;
pub mod error;
pub mod model;

pub use client::TodoApiService;
pub use error::ClientError;
pub use model::{NewTodo, Todo};
