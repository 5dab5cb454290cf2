//! JSON render documents.

use std::collections::HashSet;

use selectable_table::ColumnSpec;
use selectable_table::RenderOptions;
use selectable_table::SelectableTable;
use selectable_table::error::RenderError;
use selectable_table::model::Identifier;
use selectable_table::model::Record;
use serde::Deserialize;

/// Everything needed to render one table.
#[derive(Debug, Deserialize)]
pub struct RenderDocument {
    /// Form field name; becomes the table id.
    pub field: String,
    /// Identifiers of the pre-selected items.
    #[serde(default)]
    pub selected: Vec<Identifier>,
    /// Attribute names, in display order.
    pub columns: Vec<String>,
    pub options: RenderOptions,
    #[serde(default)]
    pub items: Vec<Record>,
}

impl RenderDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn render(self) -> Result<String, RenderError> {
        let Self {
            field,
            selected,
            columns,
            options,
            items,
        } = self;

        log::info!(
            "rendering {} {} items into '{}'",
            items.len(),
            options.model_name,
            field
        );

        let selected: HashSet<Identifier> = selected.into_iter().collect();
        let columns = columns.into_iter().map(ColumnSpec::from).collect();
        SelectableTable::new(columns, options).render(&field, Some(&selected), &items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: &str = r#"{
        "field": "pets",
        "selected": [2],
        "columns": ["name", "species", "adopted_at"],
        "options": {"model_name": "Pet", "show_delete": false, "existing_attrs": {"id": "id_pets"}},
        "items": [
            {"id": 1, "name": "Rex", "species": "dog", "adopted_at": "2021-07-04T22:00:00Z"},
            {"id": 2, "name": "Tom", "species": {"code": "c", "label": "Cat"}, "adopted_at": null}
        ]
    }"#;

    #[test]
    fn test_render_document() {
        let html = RenderDocument::from_json(PETS).unwrap().render().unwrap();

        assert!(html.contains("<th>Adopted At</th>"));
        assert!(html.contains("<td>Rex</td><td>dog</td><td>2021-07-04</td>"));
        assert!(html.contains("<td>Tom</td><td>Cat</td><td></td>"));
        assert!(html.contains(r#"value="2" id="id_pets_1" checked>"#));
        assert!(!html.contains("Remove"));
    }

    #[test]
    fn test_string_selection_matches_item_ids() {
        let json = r#"{
            "field": "pets",
            "selected": ["1", "7"],
            "columns": [],
            "options": {"model_name": "Pet"},
            "items": [{"id": 1}, {"id": "7"}, {"id": 8}]
        }"#;
        let html = RenderDocument::from_json(json).unwrap().render().unwrap();

        assert!(html.contains(r#"value="1" checked>"#), "id 1 not checked: {}", html);
        assert!(html.contains(r#"value="7" checked>"#), "id 7 not checked: {}", html);
        assert!(html.contains(r#"value="8">"#));
    }

    #[test]
    fn test_missing_column_fails() {
        let json = r#"{
            "field": "pets",
            "columns": ["owner"],
            "options": {"model_name": "Pet"},
            "items": [{"id": 1}]
        }"#;
        let err = RenderDocument::from_json(json).unwrap().render().unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 0, column 'owner': Attribute 'owner' not found"
        );
    }

    #[test]
    fn test_model_name_required() {
        let json = r#"{"field": "pets", "columns": [], "options": {}}"#;
        assert!(RenderDocument::from_json(json).is_err());
    }
}
