use std::fmt;

#[derive(Debug)]
pub enum VerifyError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty directory field, etc.).
    ConfigValidation(String),
    /// A source file cannot be parsed into tabular records. Contained to
    /// that file; callers report it and continue with the remaining files.
    ParseError { file: String, message: String },
    /// The join key is absent from one of the sets passed to the reconciler.
    /// Aborts the reconciliation, no result is produced.
    SchemaError { side: String, column: String },
    /// Result artifact rendering error.
    Csv(String),
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::ParseError { file, message } => {
                write!(f, "cannot parse '{file}': {message}")
            }
            Self::SchemaError { side, column } => {
                write!(f, "{side} set: missing required column '{column}'")
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for VerifyError {}
