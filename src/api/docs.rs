//! API Documentation
//!
//! Route metadata for the student endpoints and the OpenAPI 3.0 document
//! assembled from it. The document is served as JSON and rendered by a
//! Swagger UI page; neither affects request handling.

use axum::http::Method;
use serde_json::{json, Map, Value};

/// Path of the interactive documentation page.
pub const DOCS_PATH: &str = "/api-docs";

/// Path of the raw OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

const API_TITLE: &str = "Student CRUD API";
const API_VERSION: &str = "1.0.0";
const API_DESCRIPTION: &str = "A simple CRUD API for managing student records.";

// == Route Metadata ==
/// Documentation for one HTTP operation.
#[derive(Debug, Clone)]
pub struct RouteDoc {
    /// HTTP method
    pub method: Method,
    /// OpenAPI path template, e.g. `/students/{id}`
    pub path: &'static str,
    /// One-line summary
    pub summary: &'static str,
    /// Longer description, if any
    pub description: Option<&'static str>,
    /// Description of the `id` path parameter for item routes
    pub id_param: Option<&'static str>,
    /// Expected request body
    pub request_body: Option<BodyDoc>,
    /// Documented responses
    pub responses: Vec<ResponseDoc>,
}

/// Documentation for a JSON request body.
#[derive(Debug, Clone)]
pub struct BodyDoc {
    /// JSON schema of the body
    pub schema: Value,
    /// Key of the example under `examples`
    pub example_name: &'static str,
    /// Example body value
    pub example: Value,
}

/// Documentation for one response status.
#[derive(Debug, Clone)]
pub struct ResponseDoc {
    /// HTTP status code
    pub status: u16,
    /// Human-readable meaning of the status
    pub description: &'static str,
    /// JSON body schema; `None` for bodiless or plain-text responses
    pub schema: Option<Value>,
}

impl ResponseDoc {
    fn json(status: u16, description: &'static str, schema: Value) -> Self {
        Self {
            status,
            description,
            schema: Some(schema),
        }
    }

    fn empty(status: u16, description: &'static str) -> Self {
        Self {
            status,
            description,
            schema: None,
        }
    }
}

fn student_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Student" })
}

/// Schema of a stored student record.
fn student_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "description": "The student's ID." },
            "name": { "type": "string", "description": "The student's name." },
            "age": { "type": "integer", "description": "The student's age." }
        }
    })
}

/// Returns the documentation for every student route.
pub fn student_routes() -> Vec<RouteDoc> {
    vec![
        RouteDoc {
            method: Method::GET,
            path: "/students",
            summary: "Get all students",
            description: Some("Retrieve a list of all student records."),
            id_param: None,
            request_body: None,
            responses: vec![ResponseDoc::json(
                200,
                "A list of students.",
                json!({ "type": "array", "items": student_ref() }),
            )],
        },
        RouteDoc {
            method: Method::POST,
            path: "/students",
            summary: "Create a new student",
            description: None,
            id_param: None,
            request_body: Some(BodyDoc {
                schema: json!({
                    "type": "object",
                    "required": ["name", "age"],
                    "properties": {
                        "name": { "type": "string", "description": "The student's name." },
                        "age": { "type": "integer", "description": "The student's age." }
                    }
                }),
                example_name: "NewStudent",
                example: json!({ "name": "Charlie", "age": 21 }),
            }),
            responses: vec![ResponseDoc::json(201, "The created student.", student_ref())],
        },
        RouteDoc {
            method: Method::GET,
            path: "/students/{id}",
            summary: "Get a student by ID",
            description: None,
            id_param: Some("Numeric ID of the student to retrieve."),
            request_body: None,
            responses: vec![
                ResponseDoc::json(200, "A single student.", student_ref()),
                ResponseDoc::empty(404, "Student not found."),
            ],
        },
        RouteDoc {
            method: Method::PUT,
            path: "/students/{id}",
            summary: "Update a student by ID",
            description: Some("Replaces every field of the student except its ID."),
            id_param: Some("Numeric ID of the student to update."),
            request_body: Some(BodyDoc {
                schema: json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "age": { "type": "integer" }
                    }
                }),
                example_name: "UpdatedStudent",
                example: json!({ "name": "Alice Smith", "age": 21 }),
            }),
            responses: vec![
                ResponseDoc::json(200, "The updated student.", student_ref()),
                ResponseDoc::empty(404, "Student not found."),
            ],
        },
        RouteDoc {
            method: Method::DELETE,
            path: "/students/{id}",
            summary: "Delete a student by ID",
            description: None,
            id_param: Some("Numeric ID of the student to delete."),
            request_body: None,
            responses: vec![
                ResponseDoc::empty(204, "Student successfully deleted."),
                ResponseDoc::empty(
                    404,
                    "Student not found (the current implementation always returns 204).",
                ),
            ],
        },
    ]
}

// == OpenAPI Assembly ==
/// Builds the OpenAPI 3.0 document for the given server base URL.
pub fn openapi_document(server_url: &str) -> Value {
    let mut paths = Map::new();

    for route in student_routes() {
        let item = paths
            .entry(route.path)
            .or_insert_with(|| Value::Object(Map::new()));

        if let Value::Object(operations) = item {
            operations.insert(route.method.as_str().to_lowercase(), operation(&route));
        }
    }

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION
        },
        "servers": [
            { "url": server_url, "description": "Local development server" }
        ],
        "paths": paths,
        "components": {
            "schemas": { "Student": student_schema() }
        }
    })
}

/// Renders a single OpenAPI operation object.
fn operation(route: &RouteDoc) -> Value {
    let mut op = Map::new();
    op.insert("summary".into(), json!(route.summary));

    if let Some(description) = route.description {
        op.insert("description".into(), json!(description));
    }

    if let Some(param) = route.id_param {
        op.insert(
            "parameters".into(),
            json!([{
                "in": "path",
                "name": "id",
                "required": true,
                "description": param,
                "schema": { "type": "integer" }
            }]),
        );
    }

    if let Some(body) = &route.request_body {
        op.insert(
            "requestBody".into(),
            json!({
                "required": true,
                "content": {
                    "application/json": {
                        "schema": body.schema,
                        "examples": { body.example_name: { "value": body.example } }
                    }
                }
            }),
        );
    }

    let responses: Map<String, Value> = route
        .responses
        .iter()
        .map(|resp| {
            let mut entry = json!({ "description": resp.description });
            if let Some(schema) = &resp.schema {
                entry["content"] = json!({ "application/json": { "schema": schema } });
            }
            (resp.status.to_string(), entry)
        })
        .collect();
    op.insert("responses".into(), Value::Object(responses));

    Value::Object(op)
}

// == Swagger UI ==
/// Swagger UI page rendering the document at [`OPENAPI_PATH`].
pub const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Student CRUD API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_header() {
        let doc = openapi_document("http://localhost:3000");

        assert_eq!(doc["openapi"], "3.0.0");
        assert_eq!(doc["info"]["title"], API_TITLE);
        assert_eq!(doc["info"]["version"], API_VERSION);
        assert_eq!(doc["servers"][0]["url"], "http://localhost:3000");
    }

    #[test]
    fn test_document_lists_all_student_operations() {
        let doc = openapi_document("http://localhost:3000");
        let paths = &doc["paths"];

        assert!(paths["/students"]["get"].is_object());
        assert!(paths["/students"]["post"].is_object());
        assert!(paths["/students/{id}"]["get"].is_object());
        assert!(paths["/students/{id}"]["put"].is_object());
        assert!(paths["/students/{id}"]["delete"].is_object());
        assert_eq!(paths.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_document_status_codes() {
        let doc = openapi_document("http://localhost:3000");
        let paths = &doc["paths"];

        assert!(paths["/students"]["post"]["responses"]["201"].is_object());
        assert!(paths["/students/{id}"]["get"]["responses"]["404"].is_object());
        assert!(paths["/students/{id}"]["put"]["responses"]["200"].is_object());
        assert!(paths["/students/{id}"]["delete"]["responses"]["204"].is_object());
        assert!(paths["/students/{id}"]["delete"]["responses"]["204"]
            .get("content")
            .is_none());
    }

    #[test]
    fn test_item_routes_document_id_parameter() {
        for route in student_routes() {
            assert_eq!(route.path.contains("{id}"), route.id_param.is_some());
        }

        let doc = openapi_document("http://localhost:3000");
        let param = &doc["paths"]["/students/{id}"]["get"]["parameters"][0];
        assert_eq!(param["in"], "path");
        assert_eq!(param["name"], "id");
        assert_eq!(param["schema"]["type"], "integer");
    }

    #[test]
    fn test_request_body_examples() {
        let doc = openapi_document("http://localhost:3000");
        let body = &doc["paths"]["/students"]["post"]["requestBody"]["content"]["application/json"];

        assert_eq!(body["examples"]["NewStudent"]["value"]["name"], "Charlie");
        assert_eq!(doc["components"]["schemas"]["Student"]["properties"]["id"]["type"], "integer");
    }

    #[test]
    fn test_swagger_page_points_at_document() {
        assert!(SWAGGER_UI_HTML.contains(OPENAPI_PATH));
        assert!(SWAGGER_UI_HTML.contains(r##"dom_id: "#swagger-ui""##));
        assert!(SWAGGER_UI_HTML.trim_end().ends_with("</html>"));
    }
}
