use crate::engine::EngineOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InvertDemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub engine: EngineOptions,
    /// Leave the alpha channel unchanged (default) or invert it too.
    #[serde(default = "default_keep_alpha")]
    pub keep_alpha: bool,
    pub output: InvertOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct InvertOutputConfig {
    pub image: PathBuf,
    pub summary_json: Option<PathBuf>,
}

fn default_keep_alpha() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<InvertDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<InvertDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
