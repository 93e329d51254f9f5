//! Strongly-typed values derived from the environment and the configuration.
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::config::ServerConfig;
use crate::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_PORT};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PathSource {
    Override,
    Default,
}

/// Resolved location of the configuration document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigPath {
    path: PathBuf,
    source: PathSource,
}

impl ConfigPath {
    /// Use `override_path` unless it is missing or empty.
    pub fn resolve(override_path: Option<String>) -> Self {
        match override_path {
            Some(path) if !path.is_empty() => Self {
                path: PathBuf::from(path),
                source: PathSource::Override,
            },
            _ => Self {
                path: PathBuf::from(DEFAULT_CONFIG_PATH),
                source: PathSource::Default,
            },
        }
    }

    /// Resolve against `LOCAL_CONFIG_PATH`. Non-Unicode values count as unset.
    pub fn from_env() -> Self {
        Self::resolve(env::var(CONFIG_PATH_ENV).ok())
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            PathSource::Override => write!(f, "Using config file path: {}", self.path.display()),
            PathSource::Default => write!(
                f,
                "{} is not set, using default path: {}",
                CONFIG_PATH_ENV,
                self.path.display()
            ),
        }
    }
}

/// Port the HTTP server listens on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ListenPort(u16);

impl ListenPort {
    /// `server.port` when set, otherwise [`DEFAULT_PORT`].
    pub fn from_config(server: &ServerConfig) -> Self {
        if server.port == 0 {
            Self(DEFAULT_PORT)
        } else {
            Self(server.port)
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ListenPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
