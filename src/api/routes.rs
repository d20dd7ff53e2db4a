//! API Routes
//!
//! Configures the Axum router with all student server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::docs::{DOCS_PATH, OPENAPI_PATH};
use super::handlers::{
    create_student_handler, delete_student_handler, get_student_handler, health_handler,
    list_students_handler, openapi_handler, swagger_ui_handler, update_student_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /students` - Create a student
/// - `GET /students` - List all students
/// - `GET /students/:id` - Get a student by id
/// - `PUT /students/:id` - Replace a student by id
/// - `DELETE /students/:id` - Delete a student by id
///
/// Student paths also accept a trailing slash.
/// - `GET /health` - Health check endpoint
/// - `GET /api-docs` - Swagger UI
/// - `GET /api-docs/openapi.json` - OpenAPI document
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Trailing slashes address the same resources
    let collection = get(list_students_handler).post(create_student_handler);
    let item = get(get_student_handler)
        .put(update_student_handler)
        .delete(delete_student_handler);

    Router::new()
        .route("/students", collection.clone())
        .route("/students/", collection)
        .route("/students/:id", item.clone())
        .route("/students/:id/", item)
        .route("/health", get(health_handler))
        .route(DOCS_PATH, get(swagger_ui_handler))
        .route(OPENAPI_PATH, get(openapi_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
