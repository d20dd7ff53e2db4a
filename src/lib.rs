//! Student Records - A minimal in-memory CRUD server
//!
//! Create, read, update and delete student records over HTTP, with an
//! OpenAPI description and Swagger UI served at `/api-docs`.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::StudentStore;
