//! Tests for render snapshots and the display projection

use super::letters;
use crate::{Field, Intent, Item, RenderRow, ReorderList};

#[test]
fn test_render_model_marks_cursor_row() {
    let model = letters(3)
        .with_help(true)
        .replay([Intent::MoveDown])
        .render_model();

    assert_eq!(model.title, "Reorder the list");
    assert_eq!(model.cursor, Some(1));
    assert!(model.help_visible);
    assert!(!model.grabbed);
    assert!(!model.submitted);
    assert_eq!(
        model.rows[1],
        RenderRow {
            key: "b".into(),
            value: "b".into(),
            selected: true,
            grabbed: false,
        }
    );
    assert_eq!(model.rows.iter().filter(|r| r.selected).count(), 1);
    assert!(model.rows.iter().all(|r| !r.grabbed));
}

#[test]
fn test_render_model_grabbed_row() {
    let model = letters(3)
        .replay([Intent::ToggleGrab, Intent::MoveDown])
        .render_model();

    let dragged: Vec<&str> = model
        .rows
        .iter()
        .filter(|r| r.grabbed)
        .map(|r| r.key.as_str())
        .collect();
    assert_eq!(dragged, ["a"]);
    let keys: Vec<&str> = model.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["b", "a", "c"]);
    assert!(model.rows[1].selected && model.rows[1].grabbed);
}

#[test]
fn test_render_model_empty_list() {
    let model = letters(0).render_model();

    assert!(model.rows.is_empty());
    assert_eq!(model.cursor, None);
}

#[test]
fn test_key_and_value_rendered_separately() {
    let list = ReorderList::new("Numbers", vec![Item::new(1, 100), Item::new(2, 200)]);
    let model = list.render_model();

    assert_eq!(model.rows[0].key, "1");
    assert_eq!(model.rows[0].value, "100");
    assert_eq!(list.current_values(), [100, 200]);
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    id: u32,
    name: &'static str,
}

#[test]
fn test_custom_formatter() {
    let list = ReorderList::with_formatter(
        "Tasks",
        vec![
            Item::same(Task { id: 1, name: "write" }),
            Item::same(Task { id: 2, name: "review" }),
        ],
        |task: &Task| format!("#{} {}", task.id, task.name),
    )
    .with_field_key("tasks");

    let model = list.render_model();
    let keys: Vec<&str> = model.rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["#1 write", "#2 review"]);
    assert_eq!(list.field_key(), Some("tasks"));
}

fn drive<F: Field>(field: F, intents: &[Intent]) -> F {
    intents.iter().fold(field, |f, &intent| f.handle(intent))
}

#[test]
fn test_field_trait_drives_list() {
    let field = drive(
        letters(3),
        &[Intent::ToggleGrab, Intent::MoveUp, Intent::Submit],
    );

    assert!(Field::is_submitted(&field));
    assert_eq!(Field::current_values(&field), ["c", "b", "a"]);
    assert!(Field::render_model(&field).submitted);
}

#[test]
fn test_snapshots_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReorderList<String>>();

    let snapshot = std::sync::Arc::new(letters(3));
    let reader = std::sync::Arc::clone(&snapshot);
    let next = snapshot.handle(Intent::ToggleGrab).handle(Intent::MoveDown);

    let seen = std::thread::spawn(move || reader.current_values())
        .join()
        .unwrap();
    assert_eq!(seen, ["a", "b", "c"]);
    assert_eq!(next.current_values(), ["b", "a", "c"]);
}
