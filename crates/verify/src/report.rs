use crate::error::VerifyError;
use crate::model::{ComparisonRow, RowOrigin, Verdict, VerifySummary};
use crate::reconcile::COMPARE_FIELDS;

/// Compute summary statistics from comparison rows.
pub fn compute_summary(rows: &[ComparisonRow]) -> VerifySummary {
    let mut passed = 0;
    let mut failed = 0;
    let mut matched = 0;
    let mut expected_only = 0;
    let mut actual_only = 0;

    for row in rows {
        match row.verdict {
            Verdict::Pass => passed += 1,
            Verdict::Fail => failed += 1,
        }
        match row.origin {
            RowOrigin::Both => matched += 1,
            RowOrigin::ExpectedOnly => expected_only += 1,
            RowOrigin::ActualOnly => actual_only += 1,
        }
    }

    VerifySummary {
        total_rows: rows.len(),
        passed,
        failed,
        matched,
        expected_only,
        actual_only,
    }
}

/// Render the comparison rows as the delimited-text result artifact.
/// Header: `player_name`, then `<field>_expected`/`<field>_actual` pairs in
/// comparison order, then `result`. Null values render as empty fields.
pub fn to_csv(rows: &[ComparisonRow]) -> Result<String, VerifyError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["player_name".to_string()];
    for name in COMPARE_FIELDS {
        header.push(format!("{name}_expected"));
        header.push(format!("{name}_actual"));
    }
    header.push("result".to_string());
    writer
        .write_record(&header)
        .map_err(|e| VerifyError::Csv(e.to_string()))?;

    for row in rows {
        let mut record = vec![row.player_name.render()];
        for &name in COMPARE_FIELDS {
            let expected = row.expected.get(name).map(|v| v.render()).unwrap_or_default();
            let actual = row.actual.get(name).map(|v| v.render()).unwrap_or_default();
            record.push(expected);
            record.push(actual);
        }
        record.push(row.verdict.to_string());
        writer
            .write_record(&record)
            .map_err(|e| VerifyError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| VerifyError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| VerifyError::Csv(e.to_string()))
}
