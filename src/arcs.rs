use crate::emit::{FixResult, StringEmitter};
use crate::error::{FixError, FixErrorKind};
use crate::options::{Engine, Options};
use crate::parser::quote_constructor_tokens;
use crate::patch::patch_arc_tokens;
use crate::repair::Logger;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ARCS_KEY: &str = "arcs";
const FIELD_NAMES: [&str; 5] = ["x", "y", "radius", "alpha", "omega"];

/// One arc derived from a `new Arc(...)` token.
///
/// Every field keeps its source text. `position` is a one-element array holding
/// `"x,y"`, which is the shape downstream consumers of these files read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcRecord {
    pub position: [String; 1],
    pub radius: String,
    pub alpha: String,
    pub omega: String,
}

impl ArcRecord {
    /// Derive a record from the token text at `index` in the `arcs` array.
    ///
    /// ASCII letters, spaces and `( ) [ ]` are stripped, the remainder is split
    /// on commas and must yield exactly five non-empty fields.
    pub fn from_token(index: usize, token: &str) -> Result<Self, FixError> {
        let stripped = strip_token(token);
        let fields: Vec<&str> = stripped.split(',').collect();
        if fields.len() != FIELD_NAMES.len() {
            return Err(FixError::schema(FixErrorKind::ArcArity {
                index,
                found: fields.len(),
            }));
        }
        if let Some(i) = fields.iter().position(|f| f.is_empty()) {
            return Err(FixError::schema(FixErrorKind::EmptyArcField {
                index,
                field: FIELD_NAMES[i],
            }));
        }
        Ok(Self {
            position: [format!("{},{}", fields[0], fields[1])],
            radius: fields[2].to_string(),
            alpha: fields[3].to_string(),
            omega: fields[4].to_string(),
        })
    }
}

fn strip_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !(c.is_ascii_alphabetic() || matches!(c, ' ' | '(' | ')' | '[' | ']')))
        .collect()
}

/// Replace the token strings under `arcs` with derived records, leaving every
/// other top-level key as it was.
pub fn derive_arcs(doc: Value) -> FixResult<Value> {
    let Value::Object(mut map) = doc else {
        return Err(FixError::schema(FixErrorKind::NotAnObject));
    };
    let arcs = map
        .get_mut(ARCS_KEY)
        .ok_or_else(|| FixError::schema(FixErrorKind::MissingKey(ARCS_KEY)))?;
    let Value::Array(items) = &*arcs else {
        return Err(FixError::schema(FixErrorKind::NotAnArray(ARCS_KEY)));
    };
    let records = items
        .iter()
        .enumerate()
        .map(|(i, v)| match v.as_str() {
            Some(token) => ArcRecord::from_token(i, token),
            None => Err(FixError::schema(FixErrorKind::ArcNotString(i))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    *arcs = serde_json::to_value(records).map_err(|e| FixError::from_serde("serialize", e))?;
    Ok(Value::Object(map))
}

pub(crate) fn repair_arcs_impl(input: &str, opts: &Options, logger: &mut Logger) -> FixResult<Value> {
    let text = match opts.engine {
        Engine::Scanner => {
            let mut out = String::with_capacity(input.len() + 64);
            quote_constructor_tokens(input, &mut StringEmitter::new(&mut out), logger)?;
            out
        }
        Engine::TextPatch => patch_arc_tokens(input, logger),
    };
    let doc: Value = serde_json::from_str(&text).map_err(|e| FixError::from_serde("parse", e))?;
    derive_arcs(doc)
}
