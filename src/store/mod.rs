//! Store Module
//!
//! In-memory student collection with store-assigned ids and loose identifier matching.

mod identifier;
mod student_store;


// Re-export public types
pub use identifier::parse_identifier;
pub use student_store::StudentStore;
