#[path = "launcher.rs"]
mod launcher;

fn main() -> std::process::ExitCode {
    launcher::launch("employees", |cfg| cfg.employees.clone(), |server_cfg| async move {
        server::run_employees(&server_cfg).await
    })
}
