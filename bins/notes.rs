#[path = "launcher.rs"]
mod launcher;

fn main() -> std::process::ExitCode {
    launcher::launch("notes", |cfg| cfg.notes.clone(), |server_cfg| async move {
        server::run_notes(&server_cfg).await
    })
}
