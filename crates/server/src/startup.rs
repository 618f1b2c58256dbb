use axum::Router;
use configs::ServerConfig;
use service::{employees::InMemoryEmployeeStore, notes::InMemoryNoteStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, EmployeesState, NotesState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Notes app with a fresh, empty store.
pub fn notes_app() -> Router {
    routes::build_notes_router(NotesState::new(InMemoryNoteStore::new()), build_cors())
}

/// Employees app with a fresh, empty store.
pub fn employees_app() -> Router {
    routes::build_employees_router(EmployeesState::new(InMemoryEmployeeStore::new()), build_cors())
}

pub async fn run_notes(cfg: &ServerConfig) -> anyhow::Result<()> {
    serve("notes", cfg, notes_app()).await
}

pub async fn run_employees(cfg: &ServerConfig) -> anyhow::Result<()> {
    serve("employees", cfg, employees_app()).await
}

/// Bind the configured address and serve until the listener fails.
async fn serve(service: &'static str, cfg: &ServerConfig, app: Router) -> anyhow::Result<()> {
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    let local = listener.local_addr().map_err(StartupError::Serve)?;
    info!(service, addr = %local, "listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)?;
    Ok(())
}
