use crate::emit::{FixResult, StringEmitter};
use crate::error::{FixError, FixErrorKind};
use crate::options::{Engine, Options};
use crate::parser::join_adjacent_objects;
use crate::patch::patch_adjacent_objects;
use crate::repair::Logger;
use serde_json::Value;

pub(crate) const FEATURES_KEY: &str = "features";

/// A document holding a `features` array, plus the array's length.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDocument {
    pub value: Value,
    pub count: usize,
}

impl FeatureDocument {
    /// Wrap `value`, checking that it is an object with a `features` array.
    pub fn new(value: Value) -> FixResult<Self> {
        let count = features(&value)?.len();
        Ok(Self { value, count })
    }
}

fn features(value: &Value) -> FixResult<&Vec<Value>> {
    let map = value
        .as_object()
        .ok_or_else(|| FixError::schema(FixErrorKind::NotAnObject))?;
    map.get(FEATURES_KEY)
        .ok_or_else(|| FixError::schema(FixErrorKind::MissingKey(FEATURES_KEY)))?
        .as_array()
        .ok_or_else(|| FixError::schema(FixErrorKind::NotAnArray(FEATURES_KEY)))
}

fn features_mut(value: &mut Value) -> FixResult<&mut Vec<Value>> {
    let map = value
        .as_object_mut()
        .ok_or_else(|| FixError::schema(FixErrorKind::NotAnObject))?;
    map.get_mut(FEATURES_KEY)
        .ok_or_else(|| FixError::schema(FixErrorKind::MissingKey(FEATURES_KEY)))?
        .as_array_mut()
        .ok_or_else(|| FixError::schema(FixErrorKind::NotAnArray(FEATURES_KEY)))
}

pub(crate) fn join_features_impl(
    input: &str,
    opts: &Options,
    logger: &mut Logger,
) -> FixResult<FeatureDocument> {
    let text = match opts.engine {
        Engine::Scanner => {
            let mut out = String::with_capacity(input.len() + 16);
            join_adjacent_objects(input, FEATURES_KEY, &mut StringEmitter::new(&mut out), logger)?;
            out
        }
        Engine::TextPatch => patch_adjacent_objects(input, FEATURES_KEY, logger),
    };
    let value: Value = serde_json::from_str(&text).map_err(|e| FixError::from_serde("parse", e))?;
    FeatureDocument::new(value)
}

pub(crate) fn truncate_features_impl(
    mut value: Value,
    opts: &Options,
    logger: &mut Logger,
) -> FixResult<FeatureDocument> {
    let items = features_mut(&mut value)?;
    if items.len() > opts.feature_limit {
        logger.log(opts.feature_limit, "dropped features beyond limit");
        items.truncate(opts.feature_limit);
    }
    let count = items.len();
    Ok(FeatureDocument { value, count })
}
