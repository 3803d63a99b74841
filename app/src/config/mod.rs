use std::error::Error;
use std::fmt::Display;
use std::{env, fs, io, path};

use ld_request_header::HeaderOptions;
use serde::Deserialize;

#[cfg(test)]
mod tests;

pub const CONFIG_PATH_VAR: &str = "LD_HEADER_CONFIG";
pub const CONFIG_PATH_DEFAULT: &str = "ld-header.toml";

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct Config {
    pub headers: Option<Headers>,
    pub logging: Option<Logging>,
}

impl Config {
    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    /// Reads the file named by [CONFIG_PATH_VAR], falling back to [CONFIG_PATH_DEFAULT].
    /// Only an explicitly named file has to exist.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::read(path),
            Err(_) => {
                let path = path::Path::new(CONFIG_PATH_DEFAULT);
                if path.exists() {
                    Self::read(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn read(path: impl AsRef<path::Path>) -> Result<Self, ConfigError> {
        let toml = fs::read_to_string(path)?;
        let config = Self::from_toml(&toml)?;
        Ok(config)
    }

    pub fn header_options(&self) -> HeaderOptions {
        match &self.headers {
            Some(h) => h.to_entity(),
            None => HeaderOptions::default(),
        }
    }

    pub fn log_filter(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.filter.as_deref())
            .unwrap_or(Logging::FILTER_DEFAULT)
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Headers {
    pub default_format: Option<String>,
}

impl Headers {
    fn to_entity(&self) -> HeaderOptions {
        match &self.default_format {
            Some(format) => HeaderOptions::new(format.clone()),
            None => HeaderOptions::default(),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Logging {
    pub filter: Option<String>,
}

impl Logging {
    pub const FILTER_DEFAULT: &'static str = "info";
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl Error for ConfigError {}
impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {e}"),
            ConfigError::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}
impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        ConfigError::Io(value)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}
