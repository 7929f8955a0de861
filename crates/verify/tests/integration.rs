use std::path::PathBuf;

use scorecheck_verify::model::{RowOrigin, Value, Verdict};
use scorecheck_verify::{engine, ingest, report, PipelineConfig, RecordSet};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_set(dir: &str, files: &[&str]) -> RecordSet {
    let base = fixtures_dir().join(dir);
    let mut merged = RecordSet::new();
    for file in files {
        let path = base.join(file);
        let content = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
        merged.merge(ingest::parse_source(file, &content).unwrap());
    }
    merged
}

fn run_fixture_pipeline() -> scorecheck_verify::VerifyResult {
    let config_str = std::fs::read_to_string(fixtures_dir().join("verify.toml")).unwrap();
    let config = PipelineConfig::from_toml(&config_str).unwrap();

    let raw = load_set("input", &["players.csv", "legacy.csv", "archive.json"]);
    let actual = load_set("output", &["test.csv", "odi.csv"]);

    assert!(!raw.is_empty());
    assert!(!actual.is_empty());

    engine::run(&config, &raw, &actual).unwrap()
}

#[test]
fn end_to_end_summary() {
    let result = run_fixture_pipeline();

    // 5 classified expected records (dravid age-filtered, incomplete dropped),
    // 5 actual records, key union of 6.
    assert_eq!(result.summary.total_rows, 6);
    assert_eq!(result.summary.passed, 3);
    assert_eq!(result.summary.failed, 3);
    assert_eq!(result.summary.matched, 4);
    assert_eq!(result.summary.expected_only, 1);
    assert_eq!(result.summary.actual_only, 1);
}

#[test]
fn end_to_end_verdicts_per_player() {
    let result = run_fixture_pipeline();

    let verdict = |name: &str| {
        result
            .rows
            .iter()
            .find(|r| r.player_name.render() == name)
            .unwrap_or_else(|| panic!("no row for {name}"))
    };

    // Recomputed category agrees with the pipeline's output.
    assert_eq!(verdict("ashwin").verdict, Verdict::Pass);
    assert_eq!(verdict("kohli").verdict, Verdict::Pass);
    assert_eq!(verdict("kumble").verdict, Verdict::Pass);

    // Pipeline said Batsman, recomputation says Bowler.
    let bumrah = verdict("bumrah");
    assert_eq!(bumrah.verdict, Verdict::Fail);
    assert_eq!(bumrah.origin, RowOrigin::Both);
    assert_eq!(
        bumrah.expected.get("category"),
        Some(&Value::Text("Bowler".into()))
    );
    assert_eq!(
        bumrah.actual.get("category"),
        Some(&Value::Text("Batsman".into()))
    );

    // Age-filtered out of the expected set but present in the output.
    let dravid = verdict("dravid");
    assert_eq!(dravid.origin, RowOrigin::ActualOnly);
    assert_eq!(dravid.verdict, Verdict::Fail);
    assert!(dravid.expected.values().all(Value::is_null));

    // In the input but absent from the pipeline's output.
    let sehwag = verdict("sehwag");
    assert_eq!(sehwag.origin, RowOrigin::ExpectedOnly);
    assert_eq!(sehwag.verdict, Verdict::Fail);
    assert!(sehwag.actual.values().all(Value::is_null));
}

#[test]
fn semicolon_fixture_parses_with_alternate_separator() {
    let set = load_set("input", &["legacy.csv"]);
    assert_eq!(set.len(), 1);
    assert_eq!(
        set.records[0].get("runs"),
        Some(&Value::Number(700.0))
    );
}

#[test]
fn result_artifact_renders() {
    let result = run_fixture_pipeline();
    let csv = report::to_csv(&result.rows).unwrap();

    let mut lines = csv.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("player_name,runs_expected,runs_actual"));
    assert!(header.ends_with(",result"));

    // one line per joined row
    assert_eq!(lines.count(), result.summary.total_rows);
    assert!(csv.contains("sehwag,700,,10,,40,,t20,,Batsman,,FAIL"));
    assert!(csv.contains("ashwin,600,600,60,60,25,25,odi,odi,All-Rounder,All-Rounder,PASS"));
}

#[test]
fn json_output_is_serializable() {
    let result = run_fixture_pipeline();
    let json = serde_json::to_string_pretty(&result).unwrap();
    assert!(json.contains("\"verdict\": \"FAIL\""));
    assert!(json.contains("\"origin\": \"expected_only\""));
    assert!(json.contains("\"config_name\": \"Cricket stats verification\""));
}
