use std::sync::Arc;

use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::employee::{Employee, EmployeeCreate, EmployeeUpdate};
use service::employees::{EmployeeStore, DELETED_MESSAGE};
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;

#[derive(Clone)]
pub struct EmployeesState {
    pub store: Arc<dyn EmployeeStore>,
}

impl EmployeesState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = crate::openapi::EmployeeCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<EmployeesState>,
    ApiJson(input): ApiJson<EmployeeCreate>,
) -> Result<(StatusCode, Json<Employee>), JsonApiError> {
    let employee = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    responses((status = 200, description = "OK", body = [crate::openapi::EmployeeDoc]))
)]
pub async fn list(State(state): State<EmployeesState>) -> Json<Vec<Employee>> {
    Json(state.store.list().await)
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<EmployeesState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.store.get(&id).await?))
}

/// Binds only the path id: no body is read and an empty update is merged,
/// so a known id comes back unchanged.
// TODO: accept an `EmployeeUpdate` body once the intended PATCH payload is confirmed.
#[utoipa::path(
    patch, path = "/employee/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<EmployeesState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.store.update(&id, EmployeeUpdate::default()).await?))
}

/// 204 responses carry no body, so the confirmation only goes to the log.
#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<EmployeesState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.store.delete(&id).await?;
    info!(employee_id = %id, "{}", DELETED_MESSAGE);
    Ok(StatusCode::NO_CONTENT)
}
