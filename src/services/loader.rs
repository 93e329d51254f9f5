use std::fs;

use crate::domain::ConfigPath;
use crate::services::{ServiceError, ServiceResult};

/// Announce the resolved path on stdout and read the whole file.
pub fn read_config_bytes(path: &ConfigPath) -> ServiceResult<Vec<u8>> {
    println!("{path}");

    fs::read(path.as_path()).map_err(|source| ServiceError::ConfigRead {
        path: path.as_path().to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn reads_raw_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"app_name: raw\n").unwrap();

        let path = ConfigPath::resolve(Some(file.path().to_string_lossy().into_owned()));
        let bytes = read_config_bytes(&path).unwrap();

        assert_eq!(bytes, b"app_name: raw\n");
    }

    #[test]
    fn directory_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();

        let path = ConfigPath::resolve(Some(dir.path().to_string_lossy().into_owned()));
        let err = read_config_bytes(&path).unwrap_err();

        assert!(matches!(err, ServiceError::ConfigRead { .. }));
    }
}
