//! Note storage: trait seam plus the in-memory implementation.

pub mod repository;
pub mod memory;

pub use memory::InMemoryNoteStore;
pub use repository::NoteStore;

pub const ENTITY: &str = "Note";
