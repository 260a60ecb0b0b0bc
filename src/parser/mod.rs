//! Hand-written single-pass scanners over &str that turn the malformed exports
//! into JSON text for serde_json.

use crate::error::{FixError, FixErrorKind};

mod lex;
mod strings;
mod constructor;
mod concat;

pub(crate) use concat::join_adjacent_objects;
pub(crate) use constructor::quote_constructor_tokens;

fn to_err(pos: usize, kind: FixErrorKind) -> FixError {
    FixError::new(kind, pos)
}
