use std::collections::{BTreeMap, BTreeSet};

use crate::error::VerifyError;
use crate::model::{field, ComparisonRow, Record, RecordSet, RowOrigin, Value, Verdict};

/// Field correlating expected and actual records.
pub const JOIN_KEY: &str = "player_name";

/// Fields compared per joined row, in artifact column order.
pub const COMPARE_FIELDS: &[&str] = &["runs", "wickets", "age", "event_type", "category"];

/// Full outer join of the expected and actual sets on `player_name`, with a
/// null-aware field comparison per row.
///
/// Duplicate keys follow standard relational multiplicity: every left record
/// pairs with every matching right record; unmatched records pair with an
/// all-null opposite side. Records whose own join key is null never match
/// anything and each emit one unmatched row. The key union is iterated in
/// sorted order, so output is deterministic.
pub fn reconcile(
    expected: &RecordSet,
    actual: &RecordSet,
) -> Result<Vec<ComparisonRow>, VerifyError> {
    if !expected.has_column(JOIN_KEY) {
        return Err(VerifyError::SchemaError {
            side: "expected".into(),
            column: JOIN_KEY.into(),
        });
    }
    if !actual.has_column(JOIN_KEY) {
        return Err(VerifyError::SchemaError {
            side: "actual".into(),
            column: JOIN_KEY.into(),
        });
    }

    let (expected_by_key, expected_keyless) = index_by_key(expected);
    let (actual_by_key, actual_keyless) = index_by_key(actual);

    let keys: BTreeSet<&JoinKey> = expected_by_key.keys().chain(actual_by_key.keys()).collect();

    let mut rows = Vec::new();
    for key in keys {
        match (expected_by_key.get(key), actual_by_key.get(key)) {
            (Some(exp), Some(act)) => {
                for e in exp {
                    for a in act {
                        rows.push(compare_pair(Some(e), Some(a)));
                    }
                }
            }
            (Some(exp), None) => {
                for e in exp {
                    rows.push(compare_pair(Some(e), None));
                }
            }
            (None, Some(act)) => {
                for a in act {
                    rows.push(compare_pair(None, Some(a)));
                }
            }
            (None, None) => unreachable!("key taken from the union of both maps"),
        }
    }

    for e in expected_keyless {
        rows.push(compare_pair(Some(e), None));
    }
    for a in actual_keyless {
        rows.push(compare_pair(None, Some(a)));
    }

    Ok(rows)
}

/// Join key carrying the value's type, so a numeric name and a textual name
/// that render identically (`600` vs `"600"`) occupy distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum JoinKey {
    Number(String),
    Text(String),
}

impl JoinKey {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(JoinKey::Number(n.to_string())),
            Value::Text(t) => Some(JoinKey::Text(t.clone())),
        }
    }
}

/// Multimap of records by join key, plus the records with a null key.
fn index_by_key(set: &RecordSet) -> (BTreeMap<JoinKey, Vec<&Record>>, Vec<&Record>) {
    let mut by_key: BTreeMap<JoinKey, Vec<&Record>> = BTreeMap::new();
    let mut keyless = Vec::new();

    for record in &set.records {
        match JoinKey::of(field(record, JOIN_KEY)) {
            None => keyless.push(record),
            Some(key) => by_key.entry(key).or_default().push(record),
        }
    }

    (by_key, keyless)
}

fn compare_pair(expected: Option<&Record>, actual: Option<&Record>) -> ComparisonRow {
    let origin = match (expected, actual) {
        (Some(_), Some(_)) => RowOrigin::Both,
        (Some(_), None) => RowOrigin::ExpectedOnly,
        (None, Some(_)) => RowOrigin::ActualOnly,
        (None, None) => unreachable!("a row always has at least one side"),
    };

    let mut verdict = Verdict::Pass;
    let mut expected_fields = BTreeMap::new();
    let mut actual_fields = BTreeMap::new();

    for &name in COMPARE_FIELDS {
        let e = expected.map(|r| field(r, name).clone()).unwrap_or(Value::Null);
        let a = actual.map(|r| field(r, name).clone()).unwrap_or(Value::Null);
        if !values_equal(&e, &a) {
            verdict = Verdict::Fail;
        }
        expected_fields.insert(name.to_string(), e);
        actual_fields.insert(name.to_string(), a);
    }

    let player_name = expected
        .or(actual)
        .map(|r| field(r, JOIN_KEY).clone())
        .unwrap_or(Value::Null);

    ComparisonRow {
        player_name,
        origin,
        expected: expected_fields,
        actual: actual_fields,
        verdict,
    }
}

/// Null-aware equality: both null is equal, one-sided null is a mismatch,
/// otherwise exact value equality (no numeric tolerance).
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::Text(x), Value::Text(y)) => x == y,
        _ => false,
    }
}
