//! Errors raised while rendering a table

use super::FieldError;

/// Error type for [`SelectableTable::render`](crate::SelectableTable::render).
///
/// Rendering is all-or-nothing: the first failing cell aborts the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A column could not be resolved against an item.
    #[error("row {row}, column '{column}': {source}")]
    Attribute {
        /// Zero-based index of the rendered row.
        row: usize,
        /// Raw label of the failing column.
        column: String,
        #[source]
        source: FieldError,
    },
}

impl RenderError {
    pub(crate) fn attribute(row: usize, column: impl Into<String>, source: FieldError) -> Self {
        Self::Attribute {
            row,
            column: column.into(),
            source,
        }
    }

    /// Returns the underlying field error.
    pub fn field_error(&self) -> &FieldError {
        match self {
            Self::Attribute { source, .. } => source,
        }
    }
}
