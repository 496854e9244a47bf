//! Error types for editing commands and configuration.

use crate::editor::EditorField;
use crate::element::{ElementId, ElementKind};
use thiserror::Error;

/// Failures raised while applying an editing command.
///
/// None of these are fatal: the session logs them and leaves the document
/// untouched (or, for numeric input, proceeds with a coerced value).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("canvas geometry unavailable, drop ignored")]
    InvalidDropTarget,
    #[error("unknown element: {0}")]
    UnknownElementId(ElementId),
    #[error("non-numeric input {0:?} coerced to 0")]
    InvalidNumericInput(String),
    #[error("a drag is already in progress")]
    DragInProgress,
    #[error("no drag in progress")]
    NoDragActive,
    #[error("field {field:?} does not apply to {kind}")]
    FieldNotApplicable { field: EditorField, kind: ElementKind },
    #[error("invalid value {raw:?} for field {field:?}")]
    InvalidStyleValue { field: EditorField, raw: String },
    #[error("no element selected")]
    NothingSelected,
}

/// Result type for editing operations.
pub type EditResult<T> = Result<T, EditError>;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid default size {width}x{height}")]
    InvalidDefaultSize { width: f64, height: f64 },
}
