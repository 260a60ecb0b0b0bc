mod arcs;
pub mod cli;
pub mod emit;
pub mod error;
mod features;
pub mod options;
mod parser;
mod patch;
mod repair;

pub use arcs::{ArcRecord, derive_arcs};
pub use emit::{to_json_string, write_json};
pub use error::{ErrorCategory, FixError, FixErrorKind};
pub use features::FeatureDocument;
pub use options::{DEFAULT_FEATURE_LIMIT, Engine, Options};
pub use repair::RepairLogEntry;

use repair::Logger;
use serde_json::Value;

fn logger_for(opts: &Options) -> Logger {
    Logger::new(opts.logging, opts.log_context_window)
}

/// Repair a document whose `arcs` array holds bare `new Arc(...)` tokens and
/// derive an [`ArcRecord`] from each one. Other top-level keys pass through.
pub fn repair_arcs(input: &str, opts: &Options) -> Result<Value, FixError> {
    let mut logger = Logger::default();
    arcs::repair_arcs_impl(input, opts, &mut logger)
}

/// Like [`repair_arcs`], also returning the repair log (empty unless `opts.logging`).
pub fn repair_arcs_with_log(
    input: &str,
    opts: &Options,
) -> Result<(Value, Vec<RepairLogEntry>), FixError> {
    let mut logger = logger_for(opts);
    let v = arcs::repair_arcs_impl(input, opts, &mut logger)?;
    Ok((v, logger.into_entries()))
}

/// Repair arcs and serialize the result per `opts.pretty` / `opts.ensure_ascii`.
pub fn repair_arcs_to_string(input: &str, opts: &Options) -> Result<String, FixError> {
    let v = repair_arcs(input, opts)?;
    to_json_string(&v, opts)
}

/// Join adjacent, undelimited JSON objects into `{"features":[...]}`.
pub fn join_features(input: &str, opts: &Options) -> Result<FeatureDocument, FixError> {
    let mut logger = Logger::default();
    features::join_features_impl(input, opts, &mut logger)
}

pub fn join_features_with_log(
    input: &str,
    opts: &Options,
) -> Result<(FeatureDocument, Vec<RepairLogEntry>), FixError> {
    let mut logger = logger_for(opts);
    let doc = features::join_features_impl(input, opts, &mut logger)?;
    Ok((doc, logger.into_entries()))
}

/// Keep at most `opts.feature_limit` entries of the `features` array.
pub fn truncate_features(value: Value, opts: &Options) -> Result<FeatureDocument, FixError> {
    let mut logger = Logger::default();
    features::truncate_features_impl(value, opts, &mut logger)
}

/// Parse `input` as JSON, then truncate as [`truncate_features`] does.
pub fn truncate_features_str(input: &str, opts: &Options) -> Result<FeatureDocument, FixError> {
    let v = serde_json::from_str(input).map_err(|e| FixError::from_serde("parse", e))?;
    truncate_features(v, opts)
}

pub fn truncate_features_str_with_log(
    input: &str,
    opts: &Options,
) -> Result<(FeatureDocument, Vec<RepairLogEntry>), FixError> {
    let v = serde_json::from_str(input).map_err(|e| FixError::from_serde("parse", e))?;
    let mut logger = logger_for(opts);
    let doc = features::truncate_features_impl(v, opts, &mut logger)?;
    Ok((doc, logger.into_entries()))
}

#[cfg(test)]
mod tests;
