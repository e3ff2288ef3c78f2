use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub web_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            web_root: "web/dist".to_string(),
        }
    }
}

/// Artificial "processing" delay shown to users before results appear.
/// Only presentation adapters apply it; the engine never waits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub pacing: PacingConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => AppConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    /// Reads one TOML file without consulting the environment.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read config: {}", err))?;
        toml::from_str(&contents).map_err(|err| format!("failed to parse config: {}", err))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("RETENTION_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("RETENTION_PORT") {
            if let Ok(value) = port.parse::<u16>() {
                self.server.port = value;
            }
        }
        if let Ok(web_root) = env::var("RETENTION_WEB_ROOT") {
            if !web_root.trim().is_empty() {
                self.server.web_root = web_root;
            }
        }
        if let Ok(delay) = env::var("RETENTION_DELAY_MS") {
            if let Ok(value) = delay.parse::<u64>() {
                self.pacing.delay_ms = value;
            }
        }
        if let Ok(level) = env::var("RETENTION_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.logging.level = level;
            }
        }
        if let Ok(format) = env::var("RETENTION_LOG_FORMAT") {
            if !format.trim().is_empty() {
                self.logging.format = format;
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    env::var("RETENTION_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/retention.toml")))
}
