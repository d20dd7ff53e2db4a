//! Student record model
//!
//! A student is an open-ended JSON object with a store-assigned `id`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-supplied record fields, decoded straight from a JSON object body.
pub type Fields = Map<String, Value>;

/// Name of the reserved identifier field.
pub const ID_FIELD: &str = "id";

// == Student ==
/// A single student record.
///
/// Serializes as a flat JSON object: `id` first, then the caller fields in
/// the order they were supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    /// Store-assigned identifier, strictly positive
    pub id: u64,
    /// Caller-supplied fields, never containing `id`
    #[serde(flatten)]
    pub fields: Fields,
}

impl Student {
    // == Constructor ==
    /// Builds a record from an assigned id and caller fields.
    ///
    /// Any `id` key in `fields` is discarded so the assigned id always wins.
    pub fn new(id: u64, fields: Fields) -> Self {
        let fields = fields
            .into_iter()
            .filter(|(key, _)| key != ID_FIELD)
            .collect();

        Self { id, fields }
    }
}
