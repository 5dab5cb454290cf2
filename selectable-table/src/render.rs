//! Table rendering.

use std::collections::HashSet;

use crate::column::ColumnSpec;
use crate::error::RenderError;
use crate::html::attrs_to_html;
use crate::html::escape_html;
use crate::html::td;
use crate::model::Identifier;
use crate::model::Selectable;
use crate::model::Value;
use crate::options::DisplayTimeZone;
use crate::options::RenderOptions;

/// Renders items as a checkbox-selectable HTML table.
///
/// The column list and options are fixed at construction; every call to
/// [`render`](Self::render) is a pure function of its arguments, so one
/// table can be shared between threads.
///
/// # Example
///
/// ```
/// use selectable_table::ColumnSpec;
/// use selectable_table::RenderOptions;
/// use selectable_table::SelectableTable;
/// use selectable_table::model::Record;
///
/// let table = SelectableTable::new(
///     vec![ColumnSpec::attribute("name"), ColumnSpec::attribute("species")],
///     RenderOptions::new("Pet"),
/// );
///
/// let pets = vec![Record::with_id(1i64).set("name", "Rex").set("species", "dog")];
/// let html = table.render("pets", None, &pets).unwrap();
///
/// assert!(html.starts_with(r#"<table id="pets" class="display">"#));
/// assert!(html.contains("<td>Rex</td><td>dog</td>"));
/// assert!(html.contains(r#"<a href="/manage/Pet/1/">edit</a>"#));
/// ```
#[derive(Debug, Clone)]
pub struct SelectableTable<T> {
    columns: Vec<ColumnSpec<T>>,
    options: RenderOptions,
}

impl<T: Selectable> SelectableTable<T> {
    /// Creates a table with the given columns and options.
    pub fn new(columns: Vec<ColumnSpec<T>>, options: RenderOptions) -> Self {
        Self { columns, options }
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> &[ColumnSpec<T>] {
        &self.columns
    }

    /// Returns the render options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders the full table.
    ///
    /// `field_name` becomes the table id and the checkbox input name.
    /// Items whose identifier is in `selected` render with a checked box;
    /// `None` means nothing is selected. Items without an identifier are
    /// skipped.
    pub fn render<'a, I>(
        &self,
        field_name: &str,
        selected: Option<&HashSet<Identifier>>,
        items: I,
    ) -> Result<String, RenderError>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let empty = HashSet::new();
        let selected = selected.unwrap_or(&empty);
        let name = escape_html(field_name);

        let mut output = String::new();
        output.push_str(&format!(r#"<table id="{}" class="display">"#, name));
        output.push_str(&self.render_head());

        output.push_str("<tbody>");
        let mut rows = 0;
        for item in items {
            let Some(pk) = item.pk() else {
                log::warn!("skipping {} row without an identifier", self.options.model_name);
                continue;
            };
            let checked = selected.contains(&pk);
            output.push_str(&self.render_row(&name, rows, &pk, checked, item)?);
            rows += 1;
        }
        output.push_str("</tbody></table>");

        log::debug!(
            "rendered {} table '{}': {} rows, {} columns, {} selected",
            self.options.model_name,
            field_name,
            rows,
            self.columns.len(),
            selected.len()
        );
        Ok(output)
    }

    /// Renders the `<thead>` section.
    ///
    /// The checkbox column gets an empty `<td class="no-sort">` rather than
    /// a `<th>`, so the `<th>` cells are exactly one per column plus the
    /// enabled action columns.
    pub fn render_head(&self) -> String {
        let mut output = String::from("<thead><tr>");
        if self.options.show_checkboxes {
            output.push_str(r#"<td class="no-sort"></td>"#);
        }
        for column in &self.columns {
            output.push_str(&format!("<th>{}</th>", escape_html(&column.header())));
        }
        if self.options.show_edit {
            output.push_str(r#"<th class="no-sort">Edit</th>"#);
        }
        if self.options.show_delete {
            output.push_str(r#"<th class="no-sort">Remove</th>"#);
        }
        output.push_str("</tr></thead>");
        output
    }

    /// Renders one `<tr>` for an item.
    ///
    /// `name` must already be escaped. `index` is the position among the
    /// rendered rows and uniquifies the checkbox id.
    pub fn render_row(
        &self,
        name: &str,
        index: usize,
        pk: &Identifier,
        checked: bool,
        item: &T,
    ) -> Result<String, RenderError> {
        log::trace!("row {}: pk={} checked={}", index, pk, checked);

        let pk_text = escape_html(&pk.to_string());
        let mut output = String::from("<tr>");

        if self.options.show_checkboxes {
            output.push_str(&td(&self.render_checkbox(name, index, &pk_text, checked)));
        }

        for column in &self.columns {
            let value = column
                .resolve(item)
                .map_err(|e| RenderError::attribute(index, column.label(), e))?;
            output.push_str(&td(&escape_html(&cell_text(&value, &self.options.timezone))));
        }

        if self.options.show_edit {
            let href = escape_html(&self.options.edit_url(pk));
            output.push_str(&td(&format!(r#"<a href="{}">edit</a>"#, href)));
        }
        if self.options.show_delete {
            let href = escape_html(&self.options.delete_url(pk));
            output.push_str(&td(&format!(r#"<a href="{}">remove</a>"#, href)));
        }

        output.push_str("</tr>");
        Ok(output)
    }

    fn render_checkbox(&self, name: &str, index: usize, pk_text: &str, checked: bool) -> String {
        let mut attrs = self.options.existing_attrs.clone();
        attrs.remove("name");
        attrs.remove("value");
        attrs.remove("type");
        attrs.remove("checked");
        if let Some(id) = attrs.get_mut("id") {
            *id = format!("{}_{}", id, index);
        }
        format!(
            r#"<input type="checkbox" name="{}" value="{}"{}{}>"#,
            name,
            pk_text,
            attrs_to_html(&attrs),
            if checked { " checked" } else { "" }
        )
    }
}

/// Returns the display text of a cell value (unescaped).
///
/// Date-times show only their calendar date in `tz`.
pub fn cell_text(value: &Value, tz: &DisplayTimeZone) -> String {
    match value {
        Value::DateTime(dt) => tz.date_of(dt).format("%Y-%m-%d").to_string(),
        Value::List(items) => items
            .iter()
            .map(|item| cell_text(item, tz))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
