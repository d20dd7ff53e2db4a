//! Data models for the student records API
//!
//! The student record itself plus the auxiliary response DTOs.

pub mod responses;
pub mod student;

// Re-export commonly used types
pub use responses::HealthResponse;
pub use student::{Fields, Student, ID_FIELD};
