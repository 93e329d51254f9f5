//! YAML decoding of the configuration document.
use crate::models::config::AppConfig;
use crate::services::ServiceResult;

/// Decode `bytes` as a YAML document into an [`AppConfig`].
///
/// Scalars reach string fields as written. Unknown keys are ignored; absent
/// and null keys keep their zero value, and so does an empty document.
pub fn parse_config(bytes: &[u8]) -> ServiceResult<AppConfig> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(AppConfig::default());
    }

    let config: Option<AppConfig> = serde_yaml::from_slice(bytes)?;
    Ok(config.unwrap_or_default())
}
