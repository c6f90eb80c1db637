//! Pipeline and dashboard configuration.
//!
//! Every field has a hardcoded default so both binaries run with no
//! config file at all; `--config path` overrides the lot from JSON.

use crate::transform::ScoreBounds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Input loan dataset.
    #[serde(default = "default_input")]
    pub input_path: PathBuf,
    /// SQLite destination for the full-replace load.
    #[serde(default = "default_db")]
    pub db_path: String,
    /// Directory receiving the summary CSV and the chart PNG.
    #[serde(default = "default_out_dir")]
    pub output_dir: PathBuf,
    /// Normalization bounds for the risk score.
    #[serde(default)]
    pub score_bounds: ScoreBounds,
    /// Dashboard listen address.
    #[serde(default = "default_bind")]
    pub bind_addr: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("data/loan_data.csv")
}

fn default_db() -> String {
    "loan_warehouse.db".into()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("outputs")
}

fn default_bind() -> String {
    "127.0.0.1:8050".into()
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            input_path: default_input(),
            db_path: default_db(),
            output_dir: default_out_dir(),
            score_bounds: ScoreBounds::default(),
            bind_addr: default_bind(),
        }
    }
}

impl RiskConfig {
    /// Load from a JSON file. Missing fields fall back to the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Config with in-memory database and temp outputs for unit tests.
    pub fn default_test() -> Self {
        Self {
            input_path: PathBuf::from("data/loan_data.csv"),
            db_path: ":memory:".into(),
            output_dir: std::env::temp_dir(),
            score_bounds: ScoreBounds::Batch,
            bind_addr: "127.0.0.1:0".into(),
        }
    }
}
