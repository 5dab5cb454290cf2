//! Render configuration

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDate;
use chrono::Utc;
use chrono_tz::Tz;
use serde::Deserialize;
use serde::Serialize;

/// Timezone in which date-time values are turned into calendar dates.
///
/// Serialized as `"UTC"`, `"local"` or an IANA zone name such as
/// `"Europe/Brussels"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayTimeZone {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// The host's local timezone.
    Local,
    /// A named IANA timezone.
    Named(Tz),
}

impl DisplayTimeZone {
    /// Returns the calendar date of `dt` in this timezone.
    pub fn date_of(&self, dt: &DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Utc => dt.date_naive(),
            Self::Local => dt.with_timezone(&Local).date_naive(),
            Self::Named(tz) => dt.with_timezone(tz).date_naive(),
        }
    }
}

impl std::str::FromStr for DisplayTimeZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("utc") {
            Ok(Self::Utc)
        } else if s.eq_ignore_ascii_case("local") {
            Ok(Self::Local)
        } else {
            s.parse::<Tz>()
                .map(Self::Named)
                .map_err(|e| format!("unknown timezone '{}': {}", s, e))
        }
    }
}

impl TryFrom<String> for DisplayTimeZone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayTimeZone> for String {
    fn from(tz: DisplayTimeZone) -> Self {
        tz.to_string()
    }
}

impl std::fmt::Display for DisplayTimeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utc => f.write_str("UTC"),
            Self::Local => f.write_str("local"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl From<Tz> for DisplayTimeZone {
    fn from(tz: Tz) -> Self {
        Self::Named(tz)
    }
}

/// Options controlling how a selectable table renders.
///
/// The model name is always explicit; it forms the action-link URLs.
///
/// # Example
///
/// ```
/// use selectable_table::DisplayTimeZone;
/// use selectable_table::RenderOptions;
///
/// let options = RenderOptions::new("Pet")
///     .with_delete(false)
///     .with_timezone(DisplayTimeZone::Named(chrono_tz::Europe::Brussels))
///     .with_attr("id", "id_pets");
///
/// assert!(options.show_edit);
/// assert!(!options.show_delete);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Model name used in action-link URLs.
    pub model_name: String,

    /// Show the "Edit" column.
    ///
    /// Default: true
    #[serde(default = "default_true")]
    pub show_edit: bool,

    /// Show the "Remove" column.
    ///
    /// Default: true
    #[serde(default = "default_true")]
    pub show_delete: bool,

    /// Show the leading checkbox column.
    ///
    /// Default: true
    #[serde(default = "default_true")]
    pub show_checkboxes: bool,

    /// Extra attributes for every checkbox input. An `id` entry gets a
    /// per-row suffix.
    #[serde(default)]
    pub existing_attrs: BTreeMap<String, String>,

    /// Timezone for turning date-times into dates.
    ///
    /// Default: UTC
    #[serde(default)]
    pub timezone: DisplayTimeZone,

    /// URL prefix of the action links.
    ///
    /// Default: `/manage`
    #[serde(default = "default_manage_prefix")]
    pub manage_prefix: String,
}

fn default_true() -> bool {
    true
}

fn default_manage_prefix() -> String {
    "/manage".to_string()
}

impl RenderOptions {
    /// Creates options for the given model with default values.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            show_edit: true,
            show_delete: true,
            show_checkboxes: true,
            existing_attrs: BTreeMap::new(),
            timezone: DisplayTimeZone::default(),
            manage_prefix: default_manage_prefix(),
        }
    }

    /// Sets whether the "Edit" column is shown.
    pub fn with_edit(mut self, show: bool) -> Self {
        self.show_edit = show;
        self
    }

    /// Sets whether the "Remove" column is shown.
    pub fn with_delete(mut self, show: bool) -> Self {
        self.show_delete = show;
        self
    }

    /// Sets whether the checkbox column is shown.
    pub fn with_checkboxes(mut self, show: bool) -> Self {
        self.show_checkboxes = show;
        self
    }

    /// Adds an attribute to every checkbox input.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.existing_attrs.insert(key.into(), value.into());
        self
    }

    /// Replaces all checkbox input attributes.
    pub fn with_attrs(mut self, attrs: BTreeMap<String, String>) -> Self {
        self.existing_attrs = attrs;
        self
    }

    /// Sets the date display timezone.
    pub fn with_timezone(mut self, timezone: impl Into<DisplayTimeZone>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Sets the action-link URL prefix.
    pub fn with_manage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.manage_prefix = prefix.into();
        self
    }

    /// Creates options without edit and remove columns.
    pub fn read_only(model_name: impl Into<String>) -> Self {
        Self::new(model_name).with_edit(false).with_delete(false)
    }

    /// Returns the edit URL for an item.
    pub fn edit_url(&self, pk: &impl std::fmt::Display) -> String {
        format!("{}/{}/{}/", self.prefix(), self.model_name, pk)
    }

    /// Returns the delete URL for an item.
    pub fn delete_url(&self, pk: &impl std::fmt::Display) -> String {
        format!("{}/{}/{}/delete", self.prefix(), self.model_name, pk)
    }

    fn prefix(&self) -> &str {
        self.manage_prefix.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let options: RenderOptions = serde_json::from_str(r#"{"model_name": "Pet"}"#).unwrap();
        assert_eq!(options, RenderOptions::new("Pet"));
        assert_eq!(options.timezone, DisplayTimeZone::Utc);
    }

    #[test]
    fn test_model_name_required() {
        assert!(serde_json::from_str::<RenderOptions>(r#"{"show_edit": false}"#).is_err());
    }

    #[test]
    fn test_timezone_parsing() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"model_name": "Pet", "timezone": "America/New_York"}"#)
                .unwrap();
        assert_eq!(
            options.timezone,
            DisplayTimeZone::Named(chrono_tz::America::New_York)
        );
        assert_eq!("local".parse::<DisplayTimeZone>(), Ok(DisplayTimeZone::Local));
        assert!("Mars/Olympus".parse::<DisplayTimeZone>().is_err());
    }

    #[test]
    fn test_date_of_shifts_across_midnight() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        assert_eq!(
            DisplayTimeZone::Utc.date_of(&dt),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            DisplayTimeZone::Named(chrono_tz::Europe::Brussels).date_of(&dt),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_urls() {
        let options = RenderOptions::new("Pet").with_manage_prefix("/admin/");
        assert_eq!(options.edit_url(&7), "/admin/Pet/7/");
        assert_eq!(options.delete_url(&7), "/admin/Pet/7/delete");
    }
}
