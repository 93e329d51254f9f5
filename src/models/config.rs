//! Configuration model loaded from the YAML document.
//!
//! Every field falls back to its zero value when absent from the source or
//! written without a value (`key:` or `key: ~`).
//! `database.password` is kept and served in plaintext exactly as read.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Root configuration shared read-only with every handler.
pub struct AppConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub app_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database: DatabaseConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub server: ServerConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    /// Values outside `0..=65535` fail to parse.
    #[serde(deserialize_with = "null_as_default")]
    pub port: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listening port, `0` selects the default.
    #[serde(deserialize_with = "null_as_default")]
    pub port: u16,
    /// Request timeout in seconds. Not applied yet.
    #[serde(deserialize_with = "null_as_default")]
    pub timeout: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
