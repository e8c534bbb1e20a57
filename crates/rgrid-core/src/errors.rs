//! Error types for the relative grid engine.
//!
//! Every error is raised while building a layout from its specification
//! strings. Resolving sizes and computing bounds cannot fail.

use crate::spec::Span;
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum RGridError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while parsing an axis specification string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Axis specification declares no columns or rows")]
    EmptyAxisSpec,

    #[error("Empty size term at {}..{}", .span.start, .span.end)]
    EmptyTerm { span: Span },

    #[error("Invalid number format: {value:?}")]
    InvalidNumber { value: String, span: Span },

    #[error("Unknown size term: {value:?} (expected a number, N%, P, M or *)")]
    UnknownTerm { value: String, span: Span },
}

impl ParseError {
    /// Location of the offending text, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::EmptyAxisSpec => None,
            ParseError::EmptyTerm { span }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::UnknownTerm { span, .. } => Some(*span),
        }
    }
}

/// Errors while loading a layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed grid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {axis} specification {source_text:?}: {source}")]
    Axis {
        axis: &'static str,
        source_text: String,
        #[source]
        source: ParseError,
    },
}
