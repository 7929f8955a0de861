use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::VerifyError;
use crate::ingest;

/// Pipeline configuration: where raw input, actual output, and results live.
///
/// Directory paths are resolved relative to the config file's directory by
/// the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    /// Raw player-performance records (CSV/JSON).
    pub input_dir: String,
    /// Output of the pipeline under test (CSV, camelCase columns).
    pub output_dir: String,
    /// Specific output files to read from `output_dir`. Empty means every
    /// tabular file in the directory. A listed file that is absent is
    /// reported and skipped.
    #[serde(default)]
    pub output_files: Vec<String>,
    /// Destination for the result artifact.
    pub results_dir: String,
    #[serde(default = "default_result_file")]
    pub result_file: String,
    /// Column renames applied to the actual set. Exact-key only.
    #[serde(default = "ingest::default_rename_map")]
    pub rename: BTreeMap<String, String>,
}

fn default_result_file() -> String {
    "verify_result.csv".into()
}

impl PipelineConfig {
    pub fn from_toml(input: &str) -> Result<Self, VerifyError> {
        let config: PipelineConfig =
            toml::from_str(input).map_err(|e| VerifyError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VerifyError> {
        for (label, value) in [
            ("input_dir", &self.input_dir),
            ("output_dir", &self.output_dir),
            ("results_dir", &self.results_dir),
            ("result_file", &self.result_file),
        ] {
            if value.trim().is_empty() {
                return Err(VerifyError::ConfigValidation(format!(
                    "{label} must not be empty"
                )));
            }
        }
        Ok(())
    }
}
