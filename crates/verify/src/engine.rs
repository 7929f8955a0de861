use crate::classify;
use crate::config::PipelineConfig;
use crate::error::VerifyError;
use crate::ingest;
use crate::model::{RecordSet, VerifyMeta, VerifyResult};
use crate::reconcile;
use crate::report;

/// Run the full verification over pre-loaded record sets: derive the
/// expected set from the raw records, normalize the actual set's column
/// names, reconcile, summarize.
pub fn run(
    config: &PipelineConfig,
    raw: &RecordSet,
    actual: &RecordSet,
) -> Result<VerifyResult, VerifyError> {
    let expected = classify::classify(raw);
    let actual = ingest::normalize_columns(actual, &config.rename);

    let rows = reconcile::reconcile(&expected, &actual)?;
    let summary = report::compute_summary(&rows);

    Ok(VerifyResult {
        meta: VerifyMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        rows,
    })
}
