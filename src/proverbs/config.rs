use crate::error::{ProverbsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";

/// Runtime settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProverbsConfig {
    /// Address the web server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `official/` and `community/` example files.
    #[serde(default = "default_examples_dir")]
    pub examples_dir: PathBuf,

    /// Extensions recognized as example files (e.g. ".go")
    #[serde(default = "default_example_extensions")]
    pub example_extensions: Vec<String>,

    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_examples_dir() -> PathBuf {
    PathBuf::from("data/examples")
}

fn default_example_extensions() -> Vec<String> {
    vec![".go".to_string(), ".gotmpl".to_string(), ".txt".to_string()]
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web/static")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

impl Default for ProverbsConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            examples_dir: default_examples_dir(),
            example_extensions: default_example_extensions(),
            static_dir: default_static_dir(),
            log_filter: default_log_filter(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ProverbsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ProverbsError::Io)?;
        let config: ProverbsConfig =
            serde_json::from_str(&content).map_err(ProverbsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ProverbsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ProverbsError::Serialization)?;
        fs::write(config_path, content).map_err(ProverbsError::Io)?;
        Ok(())
    }

    /// Applies `PORT`, `PROVERBS_BIND`, `PROVERBS_EXAMPLES_DIR` and
    /// `PROVERBS_STATIC_DIR` from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`apply_env`](Self::apply_env) with an explicit lookup, so the
    /// override rules can be exercised without touching the real environment.
    pub fn apply_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => warn!(value = %port, "ignoring invalid PORT"),
            }
        }
        if let Some(bind) = lookup("PROVERBS_BIND") {
            if bind.trim().parse::<IpAddr>().is_ok() {
                self.bind_address = bind.trim().to_string();
            } else {
                warn!(value = %bind, "ignoring invalid PROVERBS_BIND");
            }
        }
        if let Some(dir) = lookup("PROVERBS_EXAMPLES_DIR").filter(|d| !d.is_empty()) {
            self.examples_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("PROVERBS_STATIC_DIR").filter(|d| !d.is_empty()) {
            self.static_dir = PathBuf::from(dir);
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ProverbsError::BadInput(format!("invalid bind address: {}", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
