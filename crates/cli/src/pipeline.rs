//! `scorecheck run` / `scorecheck validate` — config-driven pipeline verification.

use std::fs;
use std::path::{Path, PathBuf};

use scorecheck_verify::{engine, ingest, report, PipelineConfig, RecordSet, VerifyError};

use crate::exit_codes::{
    EXIT_ERROR, EXIT_INVALID_CONFIG, EXIT_NO_INPUT, EXIT_SCHEMA, EXIT_VERIFY_FAIL,
};
use crate::CliError;

fn cli_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_override: Option<PathBuf>,
) -> Result<(), CliError> {
    let config_str = fs::read_to_string(&config_path)
        .map_err(|e| cli_err(EXIT_ERROR, format!("cannot read config: {e}")))?;
    let config = PipelineConfig::from_toml(&config_str)
        .map_err(|e| cli_err(EXIT_INVALID_CONFIG, e.to_string()))?;

    // Resolve directories relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let input_dir = base_dir.join(&config.input_dir);
    let raw = load_dir(&input_dir)?;
    if raw.is_empty() {
        return Err(cli_err(
            EXIT_NO_INPUT,
            format!("no input records found in {}", input_dir.display()),
        ));
    }

    let output_dir = base_dir.join(&config.output_dir);
    let actual = if config.output_files.is_empty() {
        load_dir(&output_dir)?
    } else {
        load_named_files(&output_dir, &config.output_files)
    };
    if actual.is_empty() {
        return Err(cli_err(
            EXIT_NO_INPUT,
            format!("no actual output records found in {}", output_dir.display()),
        ));
    }

    let result = engine::run(&config, &raw, &actual).map_err(|e| match e {
        VerifyError::SchemaError { .. } => cli_err(EXIT_SCHEMA, e.to_string()),
        other => cli_err(EXIT_ERROR, other.to_string()),
    })?;

    // Result artifact
    let csv_text = report::to_csv(&result.rows)
        .map_err(|e| cli_err(EXIT_ERROR, e.to_string()))?;
    let result_path = output_override
        .unwrap_or_else(|| base_dir.join(&config.results_dir).join(&config.result_file));
    if let Some(parent) = result_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                cli_err(EXIT_ERROR, format!("cannot create {}: {e}", parent.display()))
            })?;
        }
    }
    fs::write(&result_path, &csv_text)
        .map_err(|e| cli_err(EXIT_ERROR, format!("cannot write {}: {e}", result_path.display())))?;
    eprintln!("wrote {}", result_path.display());

    if json_output {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| cli_err(EXIT_ERROR, format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "verify: {} rows — {} passed, {} failed ({} matched, {} expected-only, {} actual-only)",
        s.total_rows, s.passed, s.failed, s.matched, s.expected_only, s.actual_only,
    );

    if s.failed > 0 {
        return Err(cli_err(EXIT_VERIFY_FAIL, "verification failures found"));
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = fs::read_to_string(&config_path)
        .map_err(|e| cli_err(EXIT_ERROR, format!("cannot read config: {e}")))?;

    match PipelineConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: '{}' — input '{}', output '{}', results '{}/{}'",
                config.name,
                config.input_dir,
                config.output_dir,
                config.results_dir,
                config.result_file,
            );
            Ok(())
        }
        Err(e) => Err(cli_err(EXIT_INVALID_CONFIG, e.to_string())),
    }
}

/// Merge every parseable tabular file in `dir` into one record set.
///
/// Each file is parsed independently: a parse failure is reported to stderr
/// and that file is excluded, the remaining files still contribute. Files
/// with other extensions are skipped. An empty result is not an error here;
/// callers check for emptiness.
fn load_dir(dir: &Path) -> Result<RecordSet, CliError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| cli_err(EXIT_ERROR, format!("cannot read directory {}: {e}", dir.display())))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort(); // deterministic ingestion order

    let mut merged = RecordSet::new();
    for path in paths {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        if ingest::SourceFormat::from_name(&name).is_none() {
            continue;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("skipping {}: {e}", path.display());
                continue;
            }
        };
        match ingest::parse_source(&name, &content) {
            Ok(set) => merged.merge(set),
            Err(e) => eprintln!("skipping {}: {e}", path.display()),
        }
    }

    Ok(merged)
}

/// Read only the configured output files. A missing or unparseable file is
/// reported and skipped; the rest still contribute.
fn load_named_files(dir: &Path, files: &[String]) -> RecordSet {
    let mut merged = RecordSet::new();
    for name in files {
        let path = dir.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("skipping {}: {e}", path.display());
                continue;
            }
        };
        match ingest::parse_source(name, &content) {
            Ok(set) => merged.merge(set),
            Err(e) => eprintln!("skipping {}: {e}", path.display()),
        }
    }
    merged
}
