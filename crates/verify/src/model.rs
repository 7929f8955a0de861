use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A null-aware scalar field value.
///
/// Delimited-text fields are coerced on parse: empty → `Null`, parseable as
/// a finite f64 → `Number`, anything else → `Text`. Numeric comparison is
/// exact, no tolerance.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerce a raw delimited-text field into a typed value. Non-finite
    /// literals (`NaN`, `inf`) count as missing, so they hit the same
    /// filters and null-equality rules as an empty field.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            Ok(_) => Value::Null,
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Render for the result artifact. Null becomes an empty field.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Text(t) => t.clone(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(t) => serializer.serialize_str(t),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One player-performance entry: named fields mapped to values.
pub type Record = BTreeMap<String, Value>;

/// Look up a field, treating an absent key as null.
pub fn field<'a>(record: &'a Record, name: &str) -> &'a Value {
    static NULL: Value = Value::Null;
    record.get(name).unwrap_or(&NULL)
}

/// An ordered collection of records merged from one or more source files.
/// Duplicate join keys are permitted and never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: RecordSet) {
        self.records.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Emptiness is a soft condition the caller must check before
    /// reconciling, not an error in itself.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A column exists if any record carries the key, null or not.
    pub fn has_column(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.contains_key(name))
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "All-Rounder")]
    AllRounder,
    Batsman,
    Bowler,
    Unknown,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AllRounder => "All-Rounder",
            Self::Batsman => "Batsman",
            Self::Bowler => "Bowler",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// Which side(s) of the join produced a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrigin {
    Both,
    ExpectedOnly,
    ActualOnly,
}

/// One row of the outer-joined comparison: the join key, the expected and
/// actual value of each compared field, and the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub player_name: Value,
    pub origin: RowOrigin,
    pub expected: BTreeMap<String, Value>,
    pub actual: BTreeMap<String, Value>,
    pub verdict: Verdict,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub total_rows: usize,
    pub passed: usize,
    pub failed: usize,
    pub matched: usize,
    pub expected_only: usize,
    pub actual_only: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyResult {
    pub meta: VerifyMeta,
    pub summary: VerifySummary,
    pub rows: Vec<ComparisonRow>,
}
