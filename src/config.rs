//! Runtime configuration for the demo binaries.
//!
//! An explicit, deserialized struct built once at process start and passed by
//! parameter into the generator and search entry points — there is no ambient
//! global registry.

use crate::search::SearchParams;
use crate::synth::{BaseCurve, CombineSpec};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Pretty-printed JSON search report destination.
    pub json_out: Option<PathBuf>,
    /// Root directory of the JSON file store.
    pub store_root: Option<PathBuf>,
}

/// Synthetic input: base curve plus optional variation stack.
#[derive(Clone, Deserialize)]
pub struct SynthConfig {
    pub base: BaseCurve,
    #[serde(default)]
    pub variations: CombineSpec,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Store key, first level.
    #[serde(default = "default_target")]
    pub target: String,
    /// Store key, second level.
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default)]
    pub search: SearchParams,
    /// When present, the demo generates its input instead of loading it.
    pub synth: Option<SynthConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_target() -> String {
    "HATP7b".to_string()
}

fn default_dataset() -> String {
    "processed_combined".to_string()
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
