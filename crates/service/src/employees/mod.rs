//! Employee storage: trait seam plus the in-memory implementation.

pub mod repository;
pub mod memory;

pub use memory::InMemoryEmployeeStore;
pub use repository::EmployeeStore;

pub const ENTITY: &str = "Employee";

/// Confirmation text for a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";
