use serde::{Deserialize, Serialize};

use crate::core::ScaleKind;
use crate::error::{ChartError, ChartResult};

use super::ChartEngineConfig;

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

const SCALE_KIND_FIELDS: [&str; 3] = ["x_scale_type", "y_scale_type", "r_scale_type"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

impl ChartEngineConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;

        if value.get("schema_version").is_none() {
            check_scale_kinds(&value)?;
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
            });
        }

        if let Some(config) = value.get("config") {
            check_scale_kinds(config)?;
        }
        let payload: EngineConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse config contract payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

/// Surfaces unknown scale names as config errors before serde sees them.
fn check_scale_kinds(config: &serde_json::Value) -> ChartResult<()> {
    for field in SCALE_KIND_FIELDS {
        if let Some(name) = config.get(field).and_then(serde_json::Value::as_str) {
            name.parse::<ScaleKind>()?;
        }
    }
    Ok(())
}
