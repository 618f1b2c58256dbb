use async_trait::async_trait;
use models::note::{Note, NoteCreate, NoteUpdate};

use crate::errors::ServiceError;

/// Storage abstraction for notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn list(&self) -> Vec<Note>;
    async fn get(&self, id: &str) -> Result<Note, ServiceError>;
    async fn create(&self, input: NoteCreate) -> Result<Note, ServiceError>;
    async fn update(&self, id: &str, input: NoteUpdate) -> Result<Note, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
