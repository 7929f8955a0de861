//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of the
//! shell contract — CI scripts rely on them.
//!
//! | Code | Meaning                                           |
//! |------|---------------------------------------------------|
//! | 0    | Success, every comparison row passed              |
//! | 1    | General error (unspecified)                       |
//! | 2    | CLI usage error (bad args; emitted by clap)       |
//! | 3    | Verification ran, one or more rows FAILed         |
//! | 4    | Invalid config (parse or validation)              |
//! | 5    | Schema error: join key missing from a record set  |
//! | 6    | No input records (empty ingestion result)         |

/// Success - verification completed and every row passed.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Verification completed with FAIL rows. Like `diff(1)`, a nonzero exit
/// means "the sets differ."
pub const EXIT_VERIFY_FAIL: u8 = 3;

/// Config could not be parsed or failed validation.
pub const EXIT_INVALID_CONFIG: u8 = 4;

/// The join key column is missing from the expected or actual set.
pub const EXIT_SCHEMA: u8 = 5;

/// Ingestion produced zero records (no files, or all failed to parse).
pub const EXIT_NO_INPUT: u8 = 6;
