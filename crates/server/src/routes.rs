use axum::{
    routing::{get, patch},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::{EmployeesApiDoc, NotesApiDoc};

pub mod employees;
pub mod notes;

pub use employees::EmployeesState;
pub use notes::NotesState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Router for the notes service
pub fn build_notes_router(state: NotesState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/notes", get(notes::list).post(notes::create))
        .route(
            "/notes/:id",
            get(notes::get).patch(notes::update).delete(notes::delete),
        )
        .with_state(state);

    with_common_layers(
        api.merge(SwaggerUi::new("/docs").url("/openapi.json", NotesApiDoc::openapi())),
        cors,
    )
}

/// Router for the employees service. The update route lives under the
/// singular `/employee/:id` path.
pub fn build_employees_router(state: EmployeesState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get).delete(employees::delete),
        )
        .route("/employee/:id", patch(employees::update))
        .with_state(state);

    with_common_layers(
        api.merge(SwaggerUi::new("/docs").url("/openapi.json", EmployeesApiDoc::openapi())),
        cors,
    )
}

fn with_common_layers(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
