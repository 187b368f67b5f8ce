use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use playground_engine::ClientSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "playground.ron";

const ENV_API_BASE: &str = "PLAYGROUND_API_BASE";
const ENV_AUTH_BASE: &str = "PLAYGROUND_AUTH_BASE";

/// Terminal settings, read from a RON file. Every field is optional in the
/// file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub auth_base: String,
    pub session_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    /// No client-side timeout unless set.
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_base: client.api_base,
            auth_base: client.auth_base,
            session_dir: PathBuf::from(".playground"),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("playground.log"),
            request_timeout_secs: None,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            max_response_bytes: client.max_response_bytes,
        }
    }
}

impl AppConfig {
    /// Reads `path`. `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        let config = ron::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    /// Applies `PLAYGROUND_*` overrides looked up through `var`.
    pub fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());
        if let Some(api_base) = non_empty(ENV_API_BASE) {
            self.api_base = api_base;
        }
        if let Some(auth_base) = non_empty(ENV_AUTH_BASE) {
            self.auth_base = auth_base;
        }
        self
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_base: self.api_base.clone(),
            auth_base: self.auth_base.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}
