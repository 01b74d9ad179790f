pub mod config_env;
pub mod json_api;

pub use config_env::{sim_config_from_env, SIM_CONFIG_PATH_ENV};
pub use json_api::{simulate_batch, simulate_batch_json, BatchRequest, BatchResponse};
