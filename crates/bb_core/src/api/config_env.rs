use crate::engine::config::SimConfig;
use crate::error::{Result, SimError};
use std::{env, fs};

pub const SIM_CONFIG_PATH_ENV: &str = "BB_SIM_CONFIG_PATH";

/// `BB_SIM_CONFIG_PATH` 가 가리키는 설정 파일을 읽는다. 변수가 없거나 비어 있으면 `None`.
pub fn sim_config_from_env() -> Result<Option<SimConfig>> {
    let Ok(path) = env::var(SIM_CONFIG_PATH_ENV) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        SimError::Deserialization(format!(
            "Failed to read sim config file from {SIM_CONFIG_PATH_ENV}='{path}': {e}"
        ))
    })?;
    let config = SimConfig::from_json(&content).map_err(|e| {
        SimError::Deserialization(format!(
            "Failed to parse sim config JSON from {SIM_CONFIG_PATH_ENV}='{path}': {e}"
        ))
    })?;
    config.validate()?;

    tracing::debug!(path, "loaded sim config from env");
    Ok(Some(config))
}
