use std::sync::Arc;

use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::note::{Note, NoteCreate, NoteUpdate};
use service::notes::NoteStore;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;

#[derive(Clone)]
pub struct NotesState {
    pub store: Arc<dyn NoteStore>,
}

impl NotesState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }
}

#[utoipa::path(
    post, path = "/notes", tag = "notes",
    request_body = crate::openapi::NoteCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::NoteDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<NotesState>,
    ApiJson(input): ApiJson<NoteCreate>,
) -> Result<(StatusCode, Json<Note>), JsonApiError> {
    let note = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(
    get, path = "/notes", tag = "notes",
    responses((status = 200, description = "OK", body = [crate::openapi::NoteDoc]))
)]
pub async fn list(State(state): State<NotesState>) -> Json<Vec<Note>> {
    Json(state.store.list().await)
}

#[utoipa::path(
    get, path = "/notes/{id}", tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::NoteDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<NotesState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, JsonApiError> {
    Ok(Json(state.store.get(&id).await?))
}

#[utoipa::path(
    patch, path = "/notes/{id}", tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    request_body = crate::openapi::NoteUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::NoteDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<NotesState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<NoteUpdate>,
) -> Result<Json<Note>, JsonApiError> {
    Ok(Json(state.store.update(&id, input).await?))
}

#[utoipa::path(
    delete, path = "/notes/{id}", tag = "notes",
    params(("id" = String, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<NotesState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
