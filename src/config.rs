//! Optional TOML configuration for the CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::NetpipeError;

/// Host the CLI talks to when none is configured.
pub const DEFAULT_HOST: &str = "gillchristian.xyz";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Server host, e.g. `gillchristian.xyz` or `localhost:8080`.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: default_host(),
        }
    }
}

impl Config {
    /// Load the config from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Config, NetpipeError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                Ok(toml::from_str(&raw)?)
            }
            None => Ok(Config::default()),
        }
    }

    /// Resolve the effective host: an explicit `--host` wins over the file.
    pub fn resolve_host(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string).unwrap_or_else(|| self.host.clone())
    }
}
