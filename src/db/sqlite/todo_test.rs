//! Tests for SqliteTodoRepository.

use crate::db::{Database, SqliteDatabase, Todo, TodoRepository};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().expect("Migration should succeed");
    db
}

fn titles(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.title.as_str()).collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_fresh_unique_ids() {
    let db = setup_db().await;
    let todos = db.todos();

    let first = todos.insert("X", false).await.expect("Insert should succeed");
    let second = todos.insert("X", false).await.expect("Insert should succeed");

    assert_eq!(first.title, "X");
    assert!(!first.completed);
    assert_ne!(first.id, second.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_does_not_reuse_deleted_ids() {
    let db = setup_db().await;
    let todos = db.todos();

    let first = todos.insert("first", false).await.unwrap();
    assert!(todos.delete_by_id(first.id).await.unwrap());

    let second = todos.insert("second", false).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_insertion_order() {
    let db = setup_db().await;
    let todos = db.todos();

    for title in ["C", "A", "B", "D"] {
        todos.insert(title, false).await.unwrap();
    }

    let all = todos.list_all().await.unwrap();
    assert_eq!(titles(&all), vec!["C", "A", "B", "D"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_by_completion_partitions_list_all() {
    let db = setup_db().await;
    let todos = db.todos();

    for (i, completed) in [true, false, false, true, false].into_iter().enumerate() {
        todos.insert(&format!("todo {}", i), completed).await.unwrap();
    }

    let all = todos.list_all().await.unwrap();
    let done = todos.list_by_completion(true).await.unwrap();
    let open = todos.list_by_completion(false).await.unwrap();

    assert!(done.iter().all(|t| t.completed));
    assert!(open.iter().all(|t| !t.completed));
    assert_eq!(done.len() + open.len(), all.len());
    assert!(done.iter().all(|d| !open.iter().any(|o| o.id == d.id)));

    // Each subset keeps insertion order
    assert_eq!(titles(&done), vec!["todo 0", "todo 3"]);
    assert_eq!(titles(&open), vec!["todo 1", "todo 2", "todo 4"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_returns_record_or_none() {
    let db = setup_db().await;
    let todos = db.todos();

    let created = todos.insert("find me", true).await.unwrap();

    let found = todos.get_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created.clone()));

    let missing = todos.get_by_id(created.id + 100).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_both_fields() {
    let db = setup_db().await;
    let todos = db.todos();

    let created = todos.insert("before", false).await.unwrap();
    let updated = todos
        .update(created.id, "after", true)
        .await
        .unwrap()
        .expect("Todo should exist");

    assert_eq!(
        updated,
        Todo {
            id: created.id,
            title: "after".to_string(),
            completed: true,
        }
    );
    assert_eq!(todos.get_by_id(created.id).await.unwrap(), Some(updated));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_nonexistent_leaves_store_unchanged() {
    let db = setup_db().await;
    let todos = db.todos();

    todos.insert("keep", false).await.unwrap();
    let before = todos.list_all().await.unwrap();

    let result = todos.update(999, "nope", true).await.unwrap();
    assert!(result.is_none());
    assert_eq!(todos.list_all().await.unwrap(), before);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_reports_whether_removed() {
    let db = setup_db().await;
    let todos = db.todos();

    let created = todos.insert("gone soon", false).await.unwrap();
    todos.insert("stays", false).await.unwrap();

    assert!(todos.delete_by_id(created.id).await.unwrap());
    assert!(!todos.delete_by_id(created.id).await.unwrap());

    let remaining = todos.list_all().await.unwrap();
    assert_eq!(titles(&remaining), vec!["stays"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_nonexistent_leaves_store_unchanged() {
    let db = setup_db().await;
    let todos = db.todos();

    todos.insert("keep", true).await.unwrap();
    let before = todos.list_all().await.unwrap();

    assert!(!todos.delete_by_id(12345).await.unwrap());
    assert_eq!(todos.list_all().await.unwrap(), before);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_where_completed_keeps_incomplete_records_intact() {
    let db = setup_db().await;
    let todos = db.todos();

    let a = todos.insert("A", false).await.unwrap();
    todos.insert("B", true).await.unwrap();
    let c = todos.insert("C", false).await.unwrap();
    todos.insert("D", true).await.unwrap();

    let deleted = todos.delete_where_completed().await.unwrap();
    assert_eq!(deleted, 2);

    let remaining = todos.list_all().await.unwrap();
    assert_eq!(remaining, vec![a, c]);
}

#[tokio::test(flavor = "multi_thread")]
async fn bulk_deletes_succeed_on_empty_store() {
    let db = setup_db().await;
    let todos = db.todos();

    assert_eq!(todos.delete_where_completed().await.unwrap(), 0);
    assert_eq!(todos.delete_all().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_all_empties_store() {
    let db = setup_db().await;
    let todos = db.todos();

    todos.insert("one", false).await.unwrap();
    todos.insert("two", true).await.unwrap();

    assert_eq!(todos.delete_all().await.unwrap(), 2);
    assert!(todos.list_all().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_inserts_never_share_an_id() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db = std::sync::Arc::new(
        SqliteDatabase::open(dir.path().join("todos.db"))
            .await
            .expect("Open should succeed"),
    );
    db.migrate().expect("Migration should succeed");

    let mut handles = Vec::new();
    for i in 0..20 {
        let db = std::sync::Arc::clone(&db);
        handles.push(tokio::spawn(async move {
            db.todos().insert(&format!("todo {}", i), false).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test(flavor = "multi_thread")]
async fn filter_and_clear_scenario() {
    let db = setup_db().await;
    let todos = db.todos();

    todos.insert("A", false).await.unwrap();
    todos.insert("B", true).await.unwrap();
    todos.insert("C", false).await.unwrap();

    let all = todos.list_all().await.unwrap();
    assert_eq!(titles(&all), vec!["A", "B", "C"]);
    assert_eq!(
        all.iter().map(|t| t.completed).collect::<Vec<_>>(),
        vec![false, true, false]
    );

    assert_eq!(titles(&todos.list_by_completion(true).await.unwrap()), vec!["B"]);
    assert_eq!(
        titles(&todos.list_by_completion(false).await.unwrap()),
        vec!["A", "C"]
    );

    todos.delete_where_completed().await.unwrap();
    assert_eq!(titles(&todos.list_all().await.unwrap()), vec!["A", "C"]);
}
