//! Core types for the relative grid layout engine.
//!
//! This crate defines the size specification model shared by the parser
//! and the layout engine, plus the geometry and error types used across
//! the workspace.

pub mod spec;
pub mod types;
pub mod errors;

pub use spec::{AxisSpec, CompositeSpec, SizeTerm, Span};
pub use types::{Axis, ExtentKind, Insets, Rect, Size};
pub use errors::{ConfigError, ParseError, RGridError};
