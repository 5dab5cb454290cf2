//! Primary key type

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Visitor;
use uuid::Uuid;

/// The primary key of a selectable item.
///
/// Used for checkbox selection state and for building action-link URLs.
///
/// # Example
///
/// ```
/// use selectable_table::model::Identifier;
///
/// let pk = Identifier::from(42i64);
/// assert_eq!(pk.to_string(), "42");
///
/// let slug = Identifier::from("rex");
/// assert_eq!(slug.to_string(), "rex");
/// ```
///
/// Deserializing goes through [`Identifier::parse`] for strings, so a
/// submitted `"7"` and a stored `7` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    /// Integer key (auto-increment columns).
    Int(i64),
    /// UUID key.
    Guid(Uuid),
    /// Any other textual key (slugs, natural keys).
    Text(String),
}

impl Identifier {
    /// Parses a textual key, recognising integers and UUIDs.
    pub fn parse(s: &str) -> Self {
        if let Ok(n) = s.parse::<i64>() {
            Identifier::Int(n)
        } else if let Ok(g) = Uuid::parse_str(s) {
            Identifier::Guid(g)
        } else {
            Identifier::Text(s.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdentifierVisitor)
    }
}

struct IdentifierVisitor;

impl<'de> Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or string identifier")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Identifier, E>
    where
        E: serde::de::Error,
    {
        Ok(Identifier::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Identifier, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(v)
            .map(Identifier::Int)
            .map_err(|_| E::custom(format!("identifier {} out of range", v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Identifier, E>
    where
        E: serde::de::Error,
    {
        Ok(Identifier::parse(v))
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Int(n) => write!(f, "{}", n),
            Identifier::Guid(g) => write!(f, "{}", g),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(v: i64) -> Self {
        Identifier::Int(v)
    }
}

impl From<i32> for Identifier {
    fn from(v: i32) -> Self {
        Identifier::Int(v as i64)
    }
}

impl From<Uuid> for Identifier {
    fn from(v: Uuid) -> Self {
        Identifier::Guid(v)
    }
}

impl From<String> for Identifier {
    fn from(v: String) -> Self {
        Identifier::Text(v)
    }
}

impl From<&str> for Identifier {
    fn from(v: &str) -> Self {
        Identifier::Text(v.to_string())
    }
}

impl From<Identifier> for super::Value {
    fn from(v: Identifier) -> Self {
        match v {
            Identifier::Int(n) => super::Value::Long(n),
            Identifier::Guid(g) => super::Value::Guid(g),
            Identifier::Text(s) => super::Value::String(s),
        }
    }
}
