//! Checkbox-selectable HTML tables
//!
//! Renders a multi-select form control as an HTML table: one row per
//! selectable item, a checkbox in the first cell, attribute-derived columns
//! in the middle and optional edit/remove links at the end.

pub mod column;
pub mod error;
pub mod html;
pub mod model;
pub mod options;

mod render;

pub use column::ColumnSpec;
pub use options::DisplayTimeZone;
pub use options::RenderOptions;
pub use render::*;
