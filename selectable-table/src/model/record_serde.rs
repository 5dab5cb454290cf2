//! Loading records from JSON objects.
//!
//! - `"id"` (or `"pk"`) becomes the primary key: integers map to
//!   `Identifier::Int`, UUID strings to `Identifier::Guid`, other strings
//!   to `Identifier::Text`.
//! - Strings holding an RFC 3339 timestamp become `Value::DateTime`, plain
//!   `YYYY-MM-DD` strings become `Value::Date`, UUID strings `Value::Guid`.
//! - `{"code": ..., "label": ...}` objects become `Value::Choice`.
//! - Arrays become `Value::List`.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Deserializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use uuid::Uuid;

use super::Identifier;
use super::Record;
use super::Value;
use super::types::ChoiceValue;

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;

            match key.as_str() {
                "id" | "pk" => {
                    record.id = Option::<Identifier>::deserialize(value)
                        .map_err(serde::de::Error::custom)?;
                }
                _ => {
                    record.fields.insert(key, json_value_to_value(value));
                }
            }
        }

        Ok(record)
    }
}

/// Converts a serde_json::Value to our Value enum.
fn json_value_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    Value::Int(i as i32)
                } else {
                    Value::Long(i)
                }
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(serde_json::Value::Number(n))
            }
        }
        serde_json::Value::String(s) => {
            if let Ok(uuid) = Uuid::parse_str(&s) {
                Value::Guid(uuid)
            } else if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                Value::DateTime(dt.with_timezone(&chrono::Utc))
            } else if let Ok(d) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Value::Date(d)
            } else {
                Value::String(s)
            }
        }
        serde_json::Value::Array(arr) => {
            Value::List(arr.into_iter().map(json_value_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            // ChoiceValue denies unknown keys, so only {code, label?} objects match.
            match serde_json::from_value::<ChoiceValue>(serde_json::Value::Object(obj.clone())) {
                Ok(choice) => Value::Choice(choice),
                Err(_) => Value::Json(serde_json::Value::Object(obj)),
            }
        }
    }
}
