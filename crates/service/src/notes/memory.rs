use std::sync::Arc;

use async_trait::async_trait;
use models::note::{Note, NoteCreate, NoteUpdate};
use models::patch::Patch;
use tracing::{debug, info, instrument};

use super::{NoteStore, ENTITY};
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

/// Notes kept in a process-local map keyed by id.
#[derive(Clone, Default)]
pub struct InMemoryNoteStore {
    store: MemoryMapStore<String, Note>,
}

impl InMemoryNoteStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list(&self) -> Vec<Note> {
        self.store.values().await
    }

    async fn get(&self, id: &str) -> Result<Note, ServiceError> {
        self.store
            .get(&id.to_string())
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip_all)]
    async fn create(&self, input: NoteCreate) -> Result<Note, ServiceError> {
        let note = input.into_note(models::new_id());
        self.store.insert(note.id.clone(), note.clone()).await;
        info!(note_id = %note.id, "note created");
        Ok(note)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: NoteUpdate) -> Result<Note, ServiceError> {
        if input.is_empty() {
            debug!("empty note update");
        }
        let updated = self
            .store
            .replace_with(&id.to_string(), |current| input.merged(current))
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(note_id = %updated.id, "note updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.remove(&id.to_string()).await {
            return Err(ServiceError::not_found(ENTITY));
        }
        info!(note_id = %id, "note deleted");
        Ok(())
    }
}
