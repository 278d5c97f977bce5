mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod interaction_controller;
mod json_contract;
mod render_coordinator;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_init::ENGINE_LEGEND_LISTENER;
pub use json_contract::{ENGINE_CONFIG_JSON_SCHEMA_V1, EngineConfigJsonContractV1};
