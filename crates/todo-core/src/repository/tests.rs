//! Repository Tests
//!
//! Behaviour of the in-memory TodoStore.

use crate::domain::{DomainError, TodoId, TodoRecord};
use crate::repository::{TodoRepository, TodoStore};

fn store_with(tasks: &[&str]) -> (TodoStore, Vec<TodoId>) {
    let mut store = TodoStore::new();
    let ids = tasks.iter().map(|t| store.add_todo(t)).collect();
    (store, ids)
}

#[test]
fn test_add_todo() {
    let mut store = TodoStore::new();
    let before = store.get_todos().len();

    let id = store.add_todo("Buy milk");

    let todo = store.get_todo(id).expect("todo should exist");
    assert_eq!(todo.task, "Buy milk");
    assert!(!todo.checked);
    assert_eq!(store.get_todos().len(), before + 1);
}

#[test]
fn test_first_id_is_one() {
    let mut store = TodoStore::new();
    assert_eq!(store.peek_next_id(), TodoId::new(1));
    assert_eq!(store.add_todo("A"), TodoId::new(1));
    assert_eq!(store.add_todo("B"), TodoId::new(2));
}

#[test]
fn test_ids_never_reused_after_removal() {
    let mut store = TodoStore::new();
    let mut seen = Vec::new();

    // Interleave adds and removes, including removing the newest id
    for round in 0..10 {
        let id = store.add_todo(&format!("task {}", round));
        seen.push(id);
        if round % 2 == 0 {
            store.remove_todo(id);
        }
        if round % 3 == 0 {
            store.remove_todo(seen[0]);
        }
    }

    assert!(seen.windows(2).all(|w| w[0] < w[1]), "ids must strictly increase: {:?}", seen);
}

#[test]
fn test_get_absent() {
    let (mut store, ids) = store_with(&["A"]);
    assert!(store.get_todo(TodoId::new(42)).is_none());

    store.remove_todo(ids[0]);
    assert!(store.get_todo(ids[0]).is_none());
}

#[test]
fn test_remove_absent_is_noop() {
    let (mut store, _) = store_with(&["A", "B"]);
    let before = store.get_todos();

    assert!(store.remove_todo(TodoId::new(99)).is_none());
    assert_eq!(store.get_todos(), before);

    // Removing twice is also fine
    let id = before[0].id;
    assert!(store.remove_todo(id).is_some());
    assert!(store.remove_todo(id).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_check_round_trip() {
    let (mut store, ids) = store_with(&["A"]);
    let original = store.get_todo(ids[0]).cloned().unwrap();

    let checked = store.check_todo(ids[0], true).unwrap();
    assert!(checked.checked);
    let unchecked = store.check_todo(ids[0], false).unwrap();

    assert_eq!(unchecked, original);
}

#[test]
fn test_check_absent_is_not_found() {
    let (mut store, _) = store_with(&["A"]);
    let before = store.get_todos();

    let err = store.check_todo(TodoId::new(5), true).unwrap_err();

    assert_eq!(err, DomainError::NotFound(TodoId::new(5)));
    assert_eq!(store.get_todos(), before);
}

#[test]
fn test_get_todos_is_snapshot() {
    let (mut store, ids) = store_with(&["A", "B"]);
    let snapshot = store.get_todos();

    store.check_todo(ids[0], true).unwrap();
    store.remove_todo(ids[1]);

    assert_eq!(snapshot.len(), 2);
    assert!(!snapshot[0].checked);
}

#[test]
fn test_insertion_order() {
    let (store, _) = store_with(&["first", "second", "third"]);
    let tasks: Vec<_> = store.get_todos().into_iter().map(|t| t.task).collect();
    assert_eq!(tasks, vec!["first", "second", "third"]);
}

#[test]
fn test_scenario_add_check_remove() {
    let mut store = TodoStore::new();
    let a = store.add_todo("A");
    let b = store.add_todo("B");
    assert_eq!((a, b), (TodoId::new(1), TodoId::new(2)));

    store.check_todo(a, true).unwrap();
    store.remove_todo(b);

    assert_eq!(
        store.get_todos(),
        vec![TodoRecord { id: TodoId::new(1), task: "A".into(), checked: true }]
    );
}

#[test]
fn test_stats() {
    let (mut store, ids) = store_with(&["A", "B", "C"]);
    store.check_todo(ids[1], true).unwrap();

    let stats = store.stats();
    assert_eq!((stats.total, stats.checked, stats.remaining), (3, 1, 2));
    assert!(!store.is_empty());
}
