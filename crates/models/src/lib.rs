//! Request/response schemas for the notes and employees services.
//!
//! Payload structs check shape through serde. Employee creation adds field
//! constraints through [`validation::Validate`]; partial updates go through
//! [`patch::Patch`] and carry no constraints of their own.

pub mod errors;
pub mod validation;
pub mod patch;
pub mod note;
pub mod employee;

/// Fresh opaque record identifier (UUID v4, hyphenated).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
