//! Service layer: storage for notes and employees.
//! - Each service owns one in-memory map behind a store object; nothing is global.
//! - Store traits are the seam handlers depend on, so another backend can be plugged in.
//! - Employee creation is validated before the map is touched; updates merge as sent.

pub mod errors;
pub mod storage;
pub mod notes;
pub mod employees;
