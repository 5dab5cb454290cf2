//! End-to-end rendering scenarios.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chrono::TimeZone;
use chrono::Utc;
use selectable_table::ColumnSpec;
use selectable_table::DisplayTimeZone;
use selectable_table::RenderOptions;
use selectable_table::SelectableTable;
use selectable_table::error::FieldError;
use selectable_table::error::RenderError;
use selectable_table::html::unescape_html;
use selectable_table::model::Identifier;
use selectable_table::model::Record;
use selectable_table::model::Selectable;
use selectable_table::model::Value;

fn rex() -> Record {
    Record::with_id(1i64)
        .set("name", "Rex")
        .set("species", "dog")
}

fn header_cells(html: &str) -> usize {
    html.matches("<th>").count() + html.matches("<th class").count()
}

fn columns(names: &[&str]) -> Vec<ColumnSpec<Record>> {
    names.iter().map(|n| ColumnSpec::attribute(*n)).collect()
}

#[test]
fn test_pets_scenario() {
    let table = SelectableTable::new(columns(&["name", "species"]), RenderOptions::new("Pet"));
    let html = table.render("pets", Some(&HashSet::new()), &[rex()]).unwrap();

    assert!(html.contains(concat!(
        "<th>Name</th><th>Species</th>",
        r#"<th class="no-sort">Edit</th><th class="no-sort">Remove</th>"#
    )));
    assert!(html.contains("<td>Rex</td><td>dog</td>"));
    assert!(html.contains(r#"href="/manage/Pet/1/""#));
    assert!(html.contains(r#"href="/manage/Pet/1/delete""#));
    assert!(html.ends_with("</tbody></table>"));
}

#[test]
fn test_empty_items() {
    let table = SelectableTable::new(columns(&["name"]), RenderOptions::new("Pet"));
    let html = table.render("pets", None, &Vec::<Record>::new()).unwrap();

    let body = html.split("<tbody>").nth(1).unwrap();
    assert_eq!(body, "</tbody></table>");
    assert!(html.contains("<thead><tr>"));
    assert!(html.contains("</tr></thead>"));
}

#[test]
fn test_no_columns_only_actions() {
    let table = SelectableTable::<Record>::new(Vec::new(), RenderOptions::new("Pet"));
    let head = table.render_head();
    assert_eq!(header_cells(&head), 2);
    assert!(head.starts_with(r#"<thead><tr><td class="no-sort"></td><th class="no-sort">Edit</th>"#));

    let without_checkboxes = SelectableTable::<Record>::new(
        Vec::new(),
        RenderOptions::new("Pet").with_checkboxes(false),
    );
    assert!(!without_checkboxes.render_head().contains("<td"));
}

#[test]
fn test_header_and_row_counts() {
    let items: Vec<Record> = (1..=4)
        .map(|i| Record::with_id(i as i64).set("name", format!("pet {}", i)).set("age", i))
        .collect();

    for (edit, delete) in [(true, true), (true, false), (false, true), (false, false)] {
        let options = RenderOptions::new("Pet").with_edit(edit).with_delete(delete);
        let table = SelectableTable::new(columns(&["name", "age"]), options);
        let html = table.render("pets", None, &items).unwrap();

        let expected_th = 2 + usize::from(edit) + usize::from(delete);
        assert_eq!(header_cells(&html), expected_th);

        let head = html.split("</thead>").next().unwrap();
        assert_eq!(head.matches(r#"<td class="no-sort"></td>"#).count(), 1);
        assert_eq!(head.matches("<td").count(), 1);

        let body = html.split("<tbody>").nth(1).unwrap();
        assert_eq!(body.matches("<tr>").count(), items.len());
    }
}

#[test]
fn test_formatter_column_is_escaped() {
    let table = SelectableTable::new(
        vec![ColumnSpec::formatter("shout", |pet: &Record| {
            pet.get_string("name").ok().flatten().map(str::to_uppercase)
        })],
        RenderOptions::read_only("Pet").with_checkboxes(false),
    );
    let pets = [Record::with_id(1i64).set("name", "rex & <co>")];
    let html = table.render("pets", None, &pets).unwrap();

    assert!(html.contains("<td>REX &amp; &lt;CO&gt;</td>"));
}

#[test]
fn test_special_characters_round_trip() {
    let raw = r#"<script>alert("x")</script> & 'more'"#;
    let table = SelectableTable::new(
        columns(&["name"]),
        RenderOptions::read_only("Pet").with_checkboxes(false),
    );
    let pets = [Record::with_id(1i64).set("name", raw)];
    let html = table.render("pets", None, &pets).unwrap();

    let cell = html
        .split("<td>")
        .nth(1)
        .and_then(|rest| rest.split("</td>").next())
        .unwrap();
    assert!(!cell.contains('<'));
    assert!(!cell.contains('"'));
    assert_eq!(unescape_html(cell), raw);
}

#[test]
fn test_field_name_is_escaped() {
    let table = SelectableTable::new(columns(&["name"]), RenderOptions::new("Pet"));
    let html = table.render(r#"x" onload="evil"#, None, &[rex()]).unwrap();

    assert!(html.starts_with(r#"<table id="x&quot; onload=&quot;evil" class="display">"#));
    assert!(html.contains(r#"name="x&quot; onload=&quot;evil""#));
}

#[test]
fn test_datetime_rendered_as_date() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 15).unwrap();
    let pets = [rex().set("created_at", created)];

    let utc = SelectableTable::new(
        columns(&["created_at"]),
        RenderOptions::read_only("Pet").with_checkboxes(false),
    );
    let html = utc.render("pets", None, &pets).unwrap();
    assert!(html.contains("<th>Created At</th>"));
    assert!(html.contains("<td>2024-03-01</td>"));
    assert!(!html.contains("23:30"));

    let brussels = SelectableTable::new(
        columns(&["created_at"]),
        RenderOptions::read_only("Pet")
            .with_checkboxes(false)
            .with_timezone(DisplayTimeZone::Named(chrono_tz::Europe::Brussels)),
    );
    let html = brussels.render("pets", None, &pets).unwrap();
    assert!(html.contains("<td>2024-03-02</td>"));
}

#[test]
fn test_callable_attribute_is_invoked() {
    let pet = rex().method("display_name", |r| {
        Value::from(format!(
            "{} the {}",
            r.get_string("name").ok().flatten().unwrap_or_default(),
            r.get_string("species").ok().flatten().unwrap_or_default()
        ))
    });
    let table = SelectableTable::new(
        columns(&["display_name"]),
        RenderOptions::read_only("Pet").with_checkboxes(false),
    );
    let html = table.render("pets", None, &[pet]).unwrap();

    assert!(html.contains("<th>Display Name</th>"));
    assert!(html.contains("<td>Rex the dog</td>"));
}

#[test]
fn test_missing_attribute_propagates() {
    let table = SelectableTable::new(columns(&["name", "owner"]), RenderOptions::new("Pet"));
    let err = table.render("pets", None, &[rex()]).unwrap_err();

    let RenderError::Attribute { row, column, source } = err;
    assert_eq!(row, 0);
    assert_eq!(column, "owner");
    assert_eq!(source, FieldError::missing("owner"));
}

#[test]
fn test_custom_selectable_type() {
    struct Invoice {
        number: String,
        total: i64,
    }

    impl Selectable for Invoice {
        fn pk(&self) -> Option<Identifier> {
            Some(Identifier::Text(self.number.clone()))
        }

        fn attribute(&self, name: &str) -> Result<Value, FieldError> {
            match name {
                "number" => Ok(Value::from(self.number.as_str())),
                "total" => Ok(Value::from(self.total)),
                other => Err(FieldError::missing(other)),
            }
        }
    }

    let table = SelectableTable::new(
        vec![ColumnSpec::attribute("number"), ColumnSpec::attribute("total")],
        RenderOptions::new("Invoice").with_delete(false),
    );
    let invoices = [Invoice {
        number: "INV-7".into(),
        total: 1200,
    }];
    let selected: HashSet<Identifier> = [Identifier::from("INV-7")].into_iter().collect();
    let html = table.render("invoices", Some(&selected), &invoices).unwrap();

    assert!(html.contains(r#"value="INV-7" checked>"#));
    assert!(html.contains("<td>INV-7</td><td>1200</td>"));
    assert!(html.contains(r#"href="/manage/Invoice/INV-7/""#));
    assert!(!html.contains("delete"));
}

#[test]
fn test_shared_between_threads() {
    let table = Arc::new(SelectableTable::new(
        columns(&["name"]),
        RenderOptions::new("Pet"),
    ));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let pets = [Record::with_id(i as i64).set("name", format!("pet{}", i))];
                table.render("pets", None, &pets).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let html = handle.join().unwrap();
        assert!(html.contains(&format!("<td>pet{}</td>", i)));
    }
}
