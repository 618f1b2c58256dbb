//! Storage abstractions for service layer
//!
//! The map store is shared by both services so the locking discipline lives
//! in one place.

pub mod memory_map_store;
