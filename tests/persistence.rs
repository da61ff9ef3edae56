//! Cross-session persistence properties of the task store.
//!
//! These exercise the library directly: what survives a save/load cycle,
//! and how the derived id counter behaves across sessions.

use task_cli::store::{Listing, TodoList};
use task_cli::task::{Status, TaskChange};

fn tasks_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("tasks.json")
}

#[test]
fn round_trip_reproduces_the_collection_exactly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = tasks_path(&dir);

    let mut list = TodoList::load(&path).expect("load");
    list.add_task("Buy milk").expect("add");
    list.add_task("Walk dog").expect("add");
    list.add_task("File taxes").expect("add");
    list.update_task(2, TaskChange::Status(Status::InProgress))
        .expect("update");
    list.update_task(3, TaskChange::Status(Status::Done))
        .expect("update");
    list.save().expect("save");

    let reloaded = TodoList::load(&path).expect("reload");
    assert_eq!(reloaded.tasks(), list.tasks());
}

#[test]
fn id_counter_is_derived_from_the_loaded_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = tasks_path(&dir);

    let mut list = TodoList::load(&path).expect("load");
    list.add_task("one").expect("add");
    list.add_task("two").expect("add");
    list.save().expect("save");

    let mut next_session = TodoList::load(&path).expect("reload");
    let id = next_session.add_task("three").expect("add");
    assert_eq!(id, 3);
}

#[test]
fn id_counter_resets_when_the_persisted_file_is_emptied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = tasks_path(&dir);

    let mut list = TodoList::load(&path).expect("load");
    list.add_task("one").expect("add");
    list.add_task("two").expect("add");
    list.delete_task(1).expect("delete");
    list.delete_task(2).expect("delete");
    list.save().expect("save");

    let mut next_session = TodoList::load(&path).expect("reload");
    let id = next_session.add_task("fresh").expect("add");
    assert_eq!(id, 1);
}

#[test]
fn insertion_order_survives_delete_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = tasks_path(&dir);

    let mut list = TodoList::load(&path).expect("load");
    for description in ["a", "b", "c", "d"] {
        list.add_task(description).expect("add");
    }
    list.delete_task(2).expect("delete");
    list.add_task("e").expect("add");
    list.save().expect("save");

    let reloaded = TodoList::load(&path).expect("reload");
    let ids: Vec<u32> = reloaded.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5]);

    match reloaded.list_tasks(None) {
        Listing::Tasks(tasks) => {
            let descriptions: Vec<&str> =
                tasks.iter().map(|t| t.description.as_str()).collect();
            assert_eq!(descriptions, vec!["a", "c", "d", "e"]);
        }
        other => panic!("unexpected listing: {other:?}"),
    }
}

#[test]
fn persisted_file_is_a_json_array_with_expected_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = tasks_path(&dir);

    let mut list = TodoList::load(&path).expect("load");
    list.add_task("inspect me").expect("add");
    list.update_task(1, TaskChange::Status(Status::InProgress))
        .expect("update");
    list.save().expect("save");

    let written = std::fs::read_to_string(&path).expect("read file");
    assert!(written.trim_start().starts_with('['));
    for field in ["\"id\"", "\"description\"", "\"status\"", "\"created_at\"", "\"updated_at\""] {
        assert!(written.contains(field), "missing {field} in {written}");
    }
    assert!(written.contains("\"in-progress\""));
}

#[test]
fn timestamps_round_trip_through_rfc3339() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = tasks_path(&dir);

    let mut list = TodoList::load(&path).expect("load");
    list.add_task("timed").expect("add");
    let original = list.tasks()[0].clone();
    list.save().expect("save");

    let reloaded = TodoList::load(&path).expect("reload");
    let restored = &reloaded.tasks()[0];
    assert_eq!(restored.created_at, original.created_at);
    assert_eq!(restored.updated_at, original.updated_at);
}
