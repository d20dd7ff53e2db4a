//! API Handlers
//!
//! HTTP request handlers for the student endpoints, health and documentation.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::api::docs::{openapi_document, SWAGGER_UI_HTML};
use crate::api::extract::StudentBody;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, Student};
use crate::store::StudentStore;

/// Application state shared across all handlers.
///
/// Contains the student store wrapped in Arc<RwLock<>> so every mutation
/// runs under a single writer, plus the pre-built OpenAPI document.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe student store
    pub store: Arc<RwLock<StudentStore>>,
    /// OpenAPI document served at the docs path
    pub openapi: Arc<Value>,
}

impl AppState {
    /// Creates a new AppState with the given store and default configuration.
    pub fn new(store: StudentStore) -> Self {
        Self::with_store(store, &Config::default())
    }

    /// Creates a new AppState with an empty store from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_store(StudentStore::new(), config)
    }

    fn with_store(store: StudentStore, config: &Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            openapi: Arc::new(openapi_document(&config.server_url())),
        }
    }
}

/// Handler for POST /students
///
/// Stores a new student and returns it with its assigned id.
pub async fn create_student_handler(
    State(state): State<AppState>,
    StudentBody(fields): StudentBody,
) -> (StatusCode, Json<Student>) {
    let student = state.store.write().await.create(fields);
    info!("Created student {}", student.id);

    (StatusCode::CREATED, Json(student))
}

/// Handler for GET /students
pub async fn list_students_handler(State(state): State<AppState>) -> Json<Vec<Student>> {
    let store = state.store.read().await;
    Json(store.list())
}

/// Handler for GET /students/:id
pub async fn get_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>> {
    let store = state.store.read().await;
    let student = store.find(&id).ok_or_else(|| {
        debug!("No student matches identifier {:?}", id);
        ApiError::NotFound(id.clone())
    })?;

    Ok(Json(student))
}

/// Handler for PUT /students/:id
///
/// Replaces every field of the student except its id.
pub async fn update_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    StudentBody(fields): StudentBody,
) -> Result<Json<Student>> {
    let mut store = state.store.write().await;
    let student = store.update(&id, fields).ok_or_else(|| {
        debug!("No student matches identifier {:?}", id);
        ApiError::NotFound(id.clone())
    })?;
    info!("Updated student {}", student.id);

    Ok(Json(student))
}

/// Handler for DELETE /students/:id
///
/// Always answers 204, whether or not a student was removed.
pub async fn delete_student_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    let removed = state.store.write().await.delete(&id);
    if removed > 0 {
        info!("Deleted student {}", id);
    } else {
        debug!("Delete of {:?} matched no student", id);
    }

    StatusCode::NO_CONTENT
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /api-docs/openapi.json
pub async fn openapi_handler(State(state): State<AppState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}

/// Handler for GET /api-docs
pub async fn swagger_ui_handler() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use crate::models::Fields;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = AppState::new(StudentStore::new());

        let (status, Json(created)) = create_student_handler(
            State(state.clone()),
            StudentBody(fields(json!({"name": "Alice", "age": 20}))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.id, 1);

        let result = get_student_handler(State(state), Path("1".to_string())).await;
        let Json(found) = result.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_nonexistent_student() {
        let state = AppState::new(StudentStore::new());

        let result = get_student_handler(State(state), Path("7".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(id)) if id == "7"));
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = AppState::new(StudentStore::new());
        for name in ["A", "B"] {
            let (status, _) =
                create_student_handler(State(state.clone()), StudentBody(fields(json!({"name": name}))))
                    .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let Json(students) = list_students_handler(State(state)).await;
        let ids: Vec<u64> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = AppState::new(StudentStore::new());
        let (status, _) = create_student_handler(
            State(state.clone()),
            StudentBody(fields(json!({"name": "Alice", "age": 20}))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let result = update_student_handler(
            State(state.clone()),
            Path("1".to_string()),
            StudentBody(fields(json!({"name": "Bob"}))),
        )
        .await;
        let Json(updated) = result.unwrap();
        assert_eq!(serde_json::to_value(&updated).unwrap(), json!({"id": 1, "name": "Bob"}));

        let missing = update_student_handler(
            State(state),
            Path("2".to_string()),
            StudentBody(fields(json!({"name": "Bob"}))),
        )
        .await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_delete_handler_always_no_content() {
        let state = AppState::new(StudentStore::new());
        let (status, _) =
            create_student_handler(State(state.clone()), StudentBody(fields(json!({"name": "A"}))))
                .await;
        assert_eq!(status, StatusCode::CREATED);

        let first = delete_student_handler(State(state.clone()), Path("1".to_string())).await;
        let second = delete_student_handler(State(state.clone()), Path("1".to_string())).await;
        let never = delete_student_handler(State(state.clone()), Path("99".to_string())).await;

        assert_eq!(first, StatusCode::NO_CONTENT);
        assert_eq!(second, StatusCode::NO_CONTENT);
        assert_eq!(never, StatusCode::NO_CONTENT);
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_openapi_handler_uses_configured_url() {
        let config = Config { server_port: 8080 };
        let state = AppState::from_config(&config);

        let Json(doc) = openapi_handler(State(state)).await;
        assert_eq!(doc["servers"][0]["url"], "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_swagger_ui_handler() {
        let response = swagger_ui_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
