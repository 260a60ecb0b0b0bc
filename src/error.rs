use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixErrorKind {
    #[error("io error: {0}")]
    Io(String),
    #[error("Unexpected end")]
    UnexpectedEnd,
    #[error("Unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("{0}")]
    Parse(String),
    #[error("Missing key {0:?}")]
    MissingKey(&'static str),
    #[error("Value of {0:?} is not an array")]
    NotAnArray(&'static str),
    #[error("Document is not a JSON object")]
    NotAnObject,
    #[error("Arc #{0} is not a string")]
    ArcNotString(usize),
    #[error("Arc #{index} has {found} fields, expected 5")]
    ArcArity { index: usize, found: usize },
    #[error("Arc #{index} has an empty {field} field")]
    EmptyArcField { index: usize, field: &'static str },
}

/// Coarse failure class of a [`FixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Schema,
}

/// `position` is a byte offset into the input for scanner errors and 0 otherwise;
/// serde_json errors report their own line and column in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixError {
    pub kind: FixErrorKind,
    pub position: usize,
}

impl FixError {
    pub fn new(kind: FixErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Schema errors carry no byte position.
    pub fn schema(kind: FixErrorKind) -> Self {
        Self { kind, position: 0 }
    }

    pub fn from_serde(what: &str, err: serde_json::Error) -> Self {
        if err.is_io() {
            return Self::new(FixErrorKind::Io(err.to_string()), 0);
        }
        Self::new(FixErrorKind::Parse(format!("serde_json {} error: {}", what, err)), 0)
    }

    pub fn from_io(what: &str, err: std::io::Error) -> Self {
        Self::new(FixErrorKind::Io(format!("{}: {}", what, err)), 0)
    }

    /// Whether `position` points at a byte of the input.
    pub fn has_position(&self) -> bool {
        matches!(self.kind, FixErrorKind::UnexpectedEnd | FixErrorKind::UnexpectedChar(_))
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind {
            FixErrorKind::Io(_) => ErrorCategory::Io,
            FixErrorKind::UnexpectedEnd
            | FixErrorKind::UnexpectedChar(_)
            | FixErrorKind::Parse(_) => ErrorCategory::Parse,
            FixErrorKind::MissingKey(_)
            | FixErrorKind::NotAnArray(_)
            | FixErrorKind::NotAnObject
            | FixErrorKind::ArcNotString(_)
            | FixErrorKind::ArcArity { .. }
            | FixErrorKind::EmptyArcField { .. } => ErrorCategory::Schema,
        }
    }
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_position() {
            write!(f, "{} at position {}", self.kind, self.position)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::error::Error for FixError {}
