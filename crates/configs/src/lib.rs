use std::io;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_NOTES_PORT: u16 = 8000;
pub const DEFAULT_EMPLOYEES_PORT: u16 = 8001;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "ServerConfig::notes")]
    pub notes: ServerConfig,
    #[serde(default = "ServerConfig::employees")]
    pub employees: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notes: ServerConfig::notes(),
            employees: ServerConfig::employees(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl ServerConfig {
    pub fn notes() -> Self {
        Self { host: default_host(), port: DEFAULT_NOTES_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }

    pub fn employees() -> Self {
        Self { host: default_host(), port: DEFAULT_EMPLOYEES_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }

    /// Build from `<PREFIX>_HOST` / `<PREFIX>_PORT` / `TOKIO_WORKER_THREADS`,
    /// keeping `fallback` values for anything unset or unparsable.
    pub fn from_env(prefix: &str, fallback: ServerConfig) -> Self {
        let host = std::env::var(format!("{prefix}_HOST")).unwrap_or(fallback.host);
        let port = std::env::var(format!("{prefix}_PORT"))
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(fallback.port);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(fallback.worker_threads);
        Self { host, port, worker_threads }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn normalize(&mut self, section: &str) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("{section}.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| default_log_format());
        Self { format }
    }

    fn validate(&self) -> Result<()> {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be `compact` or `json`, got `{other}`")),
        }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_log_format() -> String { "compact".to_string() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// File config when the file exists, environment variables over defaults when it does not.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to the environment; unreadable,
    /// malformed or invalid files are errors.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::from_env()),
            Err(e) => return Err(anyhow!("cannot read config {path}: {e}")),
        };
        let mut cfg = parse(&content).map_err(|e| anyhow!("invalid config {path}: {e}"))?;
        cfg.normalize_and_validate().map_err(|e| anyhow!("invalid config {path}: {e}"))?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        Self {
            notes: ServerConfig::from_env("NOTES", ServerConfig::notes()),
            employees: ServerConfig::from_env("EMPLOYEES", ServerConfig::employees()),
            logging: LoggingConfig::from_env(),
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.notes.normalize("notes")?;
        self.employees.normalize("employees")?;
        self.logging.validate()?;
        Ok(())
    }
}
