//! Items rendered as table rows

mod identifier;
mod record;
mod record_serde;
pub mod types;
mod value;

pub use identifier::*;
pub use record::*;
pub use value::*;

use crate::error::FieldError;

/// An object that can be shown as one selectable table row.
///
/// The identifier drives both checkbox selection state and the action-link
/// URLs. Attributes are looked up by name for [`ColumnSpec::Attribute`]
/// columns.
///
/// [`ColumnSpec::Attribute`]: crate::ColumnSpec::Attribute
pub trait Selectable {
    /// Returns the primary key, or `None` for objects that were never saved.
    fn pk(&self) -> Option<Identifier>;

    /// Resolves a named attribute.
    ///
    /// Computed attributes are evaluated here; a name the item does not
    /// expose must yield [`FieldError::Missing`].
    fn attribute(&self, name: &str) -> Result<Value, FieldError>;
}

impl<T: Selectable + ?Sized> Selectable for &T {
    fn pk(&self) -> Option<Identifier> {
        (**self).pk()
    }

    fn attribute(&self, name: &str) -> Result<Value, FieldError> {
        (**self).attribute(name)
    }
}
