use crate::model::{Category, RecordSet, Value};

const MIN_AGE: f64 = 15.0;
const MAX_AGE: f64 = 50.0;

/// Ordered classification rules, evaluated top-to-bottom; the first
/// satisfied predicate wins, anything unmatched falls through to `Unknown`.
const RULES: &[(fn(f64, f64) -> bool, Category)] = &[
    (|runs, wickets| runs > 500.0 && wickets >= 50.0, Category::AllRounder),
    (|runs, wickets| runs > 500.0 && wickets < 50.0, Category::Batsman),
    (|runs, _wickets| runs < 500.0, Category::Bowler),
];

/// Pure function of runs and wickets only.
pub fn categorize(runs: f64, wickets: f64) -> Category {
    for (applies, label) in RULES {
        if applies(runs, wickets) {
            return *label;
        }
    }
    Category::Unknown
}

/// Derive the expected set from raw records:
/// 1. drop records missing a numeric `runs` or `wickets` (hard filter);
/// 2. drop records whose `age` is not a number in [15, 50] inclusive;
/// 3. assign `category` per the rule table.
///
/// Produces fresh records; the raw set is never mutated.
pub fn classify(raw: &RecordSet) -> RecordSet {
    let mut records = Vec::new();

    for record in &raw.records {
        let runs = record.get("runs").and_then(Value::as_number);
        let wickets = record.get("wickets").and_then(Value::as_number);
        let (runs, wickets) = match (runs, wickets) {
            (Some(r), Some(w)) => (r, w),
            _ => continue,
        };

        match record.get("age").and_then(Value::as_number) {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
            _ => continue,
        }

        let mut derived = record.clone();
        derived.insert(
            "category".into(),
            Value::Text(categorize(runs, wickets).label().into()),
        );
        records.push(derived);
    }

    RecordSet { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{field, Record};

    fn raw(name: &str, runs: Option<f64>, wickets: Option<f64>, age: Option<f64>) -> Record {
        let num = |v: Option<f64>| v.map(Value::Number).unwrap_or(Value::Null);
        Record::from([
            ("player_name".into(), Value::Text(name.into())),
            ("runs".into(), num(runs)),
            ("wickets".into(), num(wickets)),
            ("age".into(), num(age)),
            ("event_type".into(), Value::Text("odi".into())),
        ])
    }

    #[test]
    fn categorize_rule_order() {
        assert_eq!(categorize(600.0, 60.0), Category::AllRounder);
        assert_eq!(categorize(600.0, 49.0), Category::Batsman);
        assert_eq!(categorize(450.0, 60.0), Category::Bowler);
        assert_eq!(categorize(450.0, 10.0), Category::Bowler);
    }

    #[test]
    fn exactly_500_runs_is_unknown() {
        // Strict > and < on runs: 500 matches no rule, whatever the wickets.
        assert_eq!(categorize(500.0, 10.0), Category::Unknown);
        assert_eq!(categorize(500.0, 60.0), Category::Unknown);
    }

    #[test]
    fn categorize_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(categorize(600.0, 60.0), Category::AllRounder);
        }
    }

    #[test]
    fn missing_runs_or_wickets_dropped() {
        let set = RecordSet {
            records: vec![
                raw("A", Some(600.0), Some(60.0), Some(25.0)),
                raw("B", None, Some(60.0), Some(25.0)),
                raw("C", Some(600.0), None, Some(25.0)),
            ],
        };
        let expected = classify(&set);
        assert_eq!(expected.len(), 1);
        assert_eq!(field(&expected.records[0], "player_name"), &Value::Text("A".into()));
    }

    #[test]
    fn nan_literal_runs_treated_as_missing() {
        // Parse coerces a literal NaN cell to null, so the hard filter
        // drops the record like any other missing-runs row.
        let mut record = raw("A", None, Some(60.0), Some(25.0));
        record.insert("runs".into(), Value::parse("NaN"));
        let expected = classify(&RecordSet { records: vec![record] });
        assert!(expected.is_empty());
    }

    #[test]
    fn age_bounds_inclusive() {
        let set = RecordSet {
            records: vec![
                raw("a14", Some(100.0), Some(1.0), Some(14.0)),
                raw("a15", Some(100.0), Some(1.0), Some(15.0)),
                raw("a50", Some(100.0), Some(1.0), Some(50.0)),
                raw("a51", Some(100.0), Some(1.0), Some(51.0)),
                raw("none", Some(100.0), Some(1.0), None),
            ],
        };
        let expected = classify(&set);
        let names: Vec<_> = expected
            .records
            .iter()
            .map(|r| field(r, "player_name").render())
            .collect();
        assert_eq!(names, vec!["a15", "a50"]);
    }

    #[test]
    fn category_column_added_without_mutating_input() {
        let set = RecordSet {
            records: vec![raw("A", Some(600.0), Some(60.0), Some(25.0))],
        };
        let expected = classify(&set);
        assert_eq!(
            field(&expected.records[0], "category"),
            &Value::Text("All-Rounder".into())
        );
        assert!(!set.records[0].contains_key("category"));
    }
}
