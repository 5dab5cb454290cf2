//! Column definitions for selectable tables.

use std::str::FromStr;
use std::sync::Arc;

use crate::error::FieldError;
use crate::model::Selectable;
use crate::model::Value;

/// A formatting function for computed columns.
pub type Formatter<T> = Arc<dyn Fn(&T) -> Result<Value, FieldError> + Send + Sync>;

/// How a single column extracts its content from an item.
///
/// Columns render in the order they are given; the header text is derived
/// from the label with [`clean_underscores`].
///
/// # Example
///
/// ```
/// use selectable_table::ColumnSpec;
/// use selectable_table::model::Record;
///
/// let columns: Vec<ColumnSpec<Record>> = vec![
///     ColumnSpec::attribute("name"),
///     ColumnSpec::formatter("loud_name", |pet: &Record| {
///         pet.get_string("name").ok().flatten().map(str::to_uppercase)
///     }),
/// ];
///
/// assert_eq!(columns[1].header(), "Loud Name");
/// ```
pub enum ColumnSpec<T> {
    /// Show a named attribute of the item.
    Attribute(String),
    /// Show whatever the function returns for the item.
    Formatter {
        /// Header label.
        label: String,
        /// The formatting function.
        format: Formatter<T>,
    },
}

impl<T> ColumnSpec<T> {
    /// Creates a column showing the named attribute.
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::Attribute(name.into())
    }

    /// Creates a computed column from an infallible function.
    pub fn formatter<F, V>(label: impl Into<String>, f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::Formatter {
            label: label.into(),
            format: Arc::new(move |item: &T| -> Result<Value, FieldError> { Ok(f(item).into()) }),
        }
    }

    /// Creates a computed column from a function that may fail.
    pub fn try_formatter<F, V>(label: impl Into<String>, f: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> Result<V, FieldError> + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::Formatter {
            label: label.into(),
            format: Arc::new(move |item: &T| -> Result<Value, FieldError> { f(item).map(Into::into) }),
        }
    }

    /// Returns the raw label: the attribute name or the formatter label.
    pub fn label(&self) -> &str {
        match self {
            Self::Attribute(name) => name,
            Self::Formatter { label, .. } => label,
        }
    }

    /// Returns the human-readable header text (unescaped).
    pub fn header(&self) -> String {
        clean_underscores(self.label())
    }
}

impl<T: Selectable> ColumnSpec<T> {
    /// Resolves this column's value for one item.
    pub fn resolve(&self, item: &T) -> Result<Value, FieldError> {
        match self {
            Self::Attribute(name) => item.attribute(name),
            Self::Formatter { format, .. } => format(item),
        }
    }
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Attribute(name) => Self::Attribute(name.clone()),
            Self::Formatter { label, format } => Self::Formatter {
                label: label.clone(),
                format: Arc::clone(format),
            },
        }
    }
}

impl<T> std::fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attribute(name) => f.debug_tuple("Attribute").field(name).finish(),
            Self::Formatter { label, .. } => f
                .debug_struct("Formatter")
                .field("label", label)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> From<&str> for ColumnSpec<T> {
    fn from(name: &str) -> Self {
        Self::attribute(name)
    }
}

impl<T> From<String> for ColumnSpec<T> {
    fn from(name: String) -> Self {
        Self::Attribute(name)
    }
}

impl<T> FromStr for ColumnSpec<T> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::attribute(s))
    }
}

/// Cleans up a column label for display.
///
/// Replaces underscores with spaces and capitalizes each word: the first
/// character is upper-cased and the rest lower-cased. Runs of whitespace
/// collapse to a single space.
///
/// ```
/// use selectable_table::column::clean_underscores;
///
/// assert_eq!(clean_underscores("created_at"), "Created At");
/// assert_eq!(clean_underscores("a_b_c"), "A B C");
/// ```
pub fn clean_underscores(s: &str) -> String {
    s.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
