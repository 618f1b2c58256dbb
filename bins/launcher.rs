//! Process bootstrap shared by the service binaries.

use std::future::Future;
use std::process::ExitCode;

use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

pub fn launch<F, Fut>(service: &'static str, pick: fn(&AppConfig) -> ServerConfig, run: F) -> ExitCode
where
    F: FnOnce(ServerConfig) -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    // load .env before reading RUST_LOG / LOG_FORMAT
    dotenv().ok();
    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service, event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(&cfg.logging.format);
    info!(service, event = "logger_init", format = %cfg.logging.format, "tracing subscriber initialized");

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let server_cfg = pick(&cfg);
    let worker_threads = server_cfg.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        addr = %server_cfg.bind_addr(),
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            if let Err(e) = run(server_cfg).await {
                error!(service, event = "run_failed", error = %e, "service returned error");
                Err(e)
            } else {
                Ok(())
            }
        });

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(service, event = "stop", %service_id, pid, "service stopped normally");
                        ExitCode::SUCCESS
                    }
                    // already logged inside the task
                    Ok(Err(_)) => ExitCode::FAILURE,
                    Err(e) => {
                        error!(service, event = "task_join_error", error = %e, "service task join error");
                        ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // in-memory state is dropped with the process
                info!(service, event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                ExitCode::SUCCESS
            }
        }
    })
}
