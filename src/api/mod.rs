//! API Module
//!
//! HTTP handlers, routing and documentation for the student records REST API.
//!
//! # Endpoints
//! - `POST /students`, `GET /students` - Create and list students
//! - `GET|PUT|DELETE /students/:id` - Read, replace and delete one student
//! - `GET /health` - Health check endpoint
//! - `GET /api-docs` - Interactive API documentation

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
