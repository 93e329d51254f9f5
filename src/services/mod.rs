//! Startup services turning the configuration file into an [`AppConfig`].
use std::path::PathBuf;

use crate::domain::ConfigPath;
use crate::models::config::AppConfig;

pub mod loader;
pub mod parser;
pub mod report;

/// Convenience alias for service results.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Read and decode the document at `path`.
pub fn load_config(path: &ConfigPath) -> ServiceResult<AppConfig> {
    let bytes = loader::read_config_bytes(path)?;
    let config = parser::parse_config(&bytes)?;
    log::info!(
        "Loaded configuration for {} {} from {}",
        config.app_name,
        config.version,
        path.as_path().display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_config_reads_override_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("custom.yaml");
        fs::write(
            &file,
            "app_name: demo\nversion: 2.1.0\nserver:\n  port: 9090\nfeatures:\n  - a\n  - b\n",
        )
        .unwrap();

        let path = ConfigPath::resolve(Some(file.to_string_lossy().into_owned()));
        let config = load_config(&path).unwrap();

        assert_eq!(config.app_name, "demo");
        assert_eq!(config.version, "2.1.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.features, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn load_config_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("absent.yaml");

        let path = ConfigPath::resolve(Some(file.to_string_lossy().into_owned()));
        let err = load_config(&path).unwrap_err();

        match err {
            ServiceError::ConfigRead { path, source } => {
                assert_eq!(path, file);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_config_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("broken.yaml");
        fs::write(&file, "server:\n  port: \"not-a-number\"\n").unwrap();

        let path = ConfigPath::resolve(Some(file.to_string_lossy().into_owned()));
        let err = load_config(&path).unwrap_err();

        assert!(matches!(err, ServiceError::ConfigParse(_)));
    }
}
