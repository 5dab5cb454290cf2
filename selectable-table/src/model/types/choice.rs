//! Choice field values

use serde::Deserialize;

/// A value drawn from a fixed set of choices.
///
/// The code is what gets stored; the label is the human-readable text.
/// Tables show the label when one is known.
///
/// # Example
///
/// ```
/// use selectable_table::model::types::ChoiceValue;
///
/// let species = ChoiceValue::with_label("dog", "Dog");
/// assert_eq!(species.to_string(), "Dog");
///
/// let raw = ChoiceValue::new("cat");
/// assert_eq!(raw.to_string(), "cat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceValue {
    /// The stored code.
    pub code: String,
    /// The display label, if available.
    #[serde(default)]
    pub label: Option<String>,
}

impl ChoiceValue {
    /// Creates a choice value without a label.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: None,
        }
    }

    /// Creates a choice value with a label.
    pub fn with_label(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: Some(label.into()),
        }
    }

    /// Returns the label, falling back to the code.
    pub fn display(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.code)
    }
}

impl std::fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}
