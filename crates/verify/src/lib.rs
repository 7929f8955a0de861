//! `scorecheck-verify` — pipeline-output verification engine.
//!
//! Pure engine crate: receives pre-loaded file contents, returns comparison
//! results. No CLI or filesystem traversal.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod reconcile;
pub mod report;

pub use config::PipelineConfig;
pub use engine::run;
pub use error::VerifyError;
pub use model::{ComparisonRow, Record, RecordSet, Verdict, VerifyResult};
