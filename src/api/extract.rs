//! Request Extractors
//!
//! Body extraction for student create and replace requests.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::models::Fields;

/// Student fields taken from a JSON object body.
///
/// A request without a JSON content type, or with an empty body, yields no
/// fields rather than a rejection. Malformed JSON and non-object bodies are
/// still rejected with axum's JSON rejection.
#[derive(Debug)]
pub struct StudentBody(pub Fields);

#[async_trait]
impl<S> FromRequest<S> for StudentBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content = is_json_content_type(&req);
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !json_content || bytes.is_empty() {
            debug!("Request carries no JSON body, using empty fields");
            return Ok(Self(Fields::new()));
        }

        let Json(fields) =
            Json::<Fields>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(Self(fields))
    }
}

/// True when the request declares an `application/json` body.
fn is_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
