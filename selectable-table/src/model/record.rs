//! Dynamic record

use std::collections::HashMap;
use std::sync::Arc;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use super::Identifier;
use super::Selectable;
use super::Value;
use super::types::ChoiceValue;
use crate::error::FieldError;

/// A computed attribute, evaluated against the record that owns it.
pub type Method = Arc<dyn Fn(&Record) -> Value + Send + Sync>;

/// A dynamic object with named attributes.
///
/// Records hold stored values as a `HashMap<String, Value>` and may also
/// carry *methods*: computed attributes that are invoked with no further
/// arguments whenever a column asks for them by name. Typed getter methods
/// provide safe access with proper error handling.
///
/// # Example
///
/// ```
/// use selectable_table::model::Record;
/// use selectable_table::model::Selectable;
/// use selectable_table::model::Value;
///
/// let pet = Record::with_id(1i64)
///     .set("name", "Rex")
///     .set("species", "dog")
///     .method("shout", |r| {
///         Value::from(r.get_string("name").ok().flatten().map(str::to_uppercase))
///     });
///
/// assert_eq!(pet.get_string("name").unwrap(), Some("Rex"));
/// assert_eq!(pet.attribute("shout").unwrap(), Value::from("REX"));
/// ```
#[derive(Clone)]
pub struct Record {
    /// The primary key of the record.
    pub(crate) id: Option<Identifier>,

    /// The stored field values.
    pub(crate) fields: HashMap<String, Value>,

    /// Computed attributes.
    pub(crate) methods: HashMap<String, Method>,
}

impl Record {
    /// Creates a new unsaved record.
    pub fn new() -> Self {
        Self {
            id: None,
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    /// Creates a new record with the given primary key.
    pub fn with_id(id: impl Into<Identifier>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::new()
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the stored field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record stores the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Registers a computed attribute (builder pattern).
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Record) -> Value + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(f));
        self
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as i64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "long", other.type_name())),
        }
    }

    /// Gets a date field value.
    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(field, "date", other.type_name())),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a choice field value.
    pub fn get_choice(&self, field: &str) -> Result<Option<&ChoiceValue>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Choice(c)) => Ok(Some(c)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "choice",
                other.type_name(),
            )),
        }
    }
}

impl Selectable for Record {
    fn pk(&self) -> Option<Identifier> {
        self.id.clone()
    }

    fn attribute(&self, name: &str) -> Result<Value, FieldError> {
        if let Some(method) = self.methods.get(name) {
            return Ok(method(self));
        }
        if let Some(value) = self.fields.get(name) {
            return Ok(value.clone());
        }
        match (name, &self.id) {
            ("pk" | "id", Some(id)) => Ok(Value::from(id.clone())),
            _ => Err(FieldError::missing(name)),
        }
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods: Vec<_> = self.methods.keys().collect();
        methods.sort();
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("methods", &methods)
            .finish()
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}
