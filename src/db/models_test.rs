//! Tests for domain models.

use crate::db::models::*;

#[test]
fn todo_serializes_to_api_shape() {
    let todo = Todo {
        id: 7,
        title: "Buy milk".to_string(),
        completed: false,
    };

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": 7, "title": "Buy milk", "completed": false})
    );
}

#[test]
fn status_filter_parses_known_values() {
    assert_eq!(
        StatusFilter::parse_lenient(Some("completed")),
        StatusFilter::Completed
    );
    assert_eq!(
        StatusFilter::parse_lenient(Some("incomplete")),
        StatusFilter::Incomplete
    );
    assert_eq!(StatusFilter::parse_lenient(Some("all")), StatusFilter::All);
}

#[test]
fn status_filter_falls_back_to_all() {
    assert_eq!(StatusFilter::parse_lenient(None), StatusFilter::All);
    assert_eq!(StatusFilter::parse_lenient(Some("")), StatusFilter::All);
    assert_eq!(StatusFilter::parse_lenient(Some("done")), StatusFilter::All);
    // Matching is case-sensitive
    assert_eq!(
        StatusFilter::parse_lenient(Some("Completed")),
        StatusFilter::All
    );
}

#[test]
fn status_filter_maps_to_completed_flag() {
    assert_eq!(StatusFilter::All.completed(), None);
    assert_eq!(StatusFilter::Completed.completed(), Some(true));
    assert_eq!(StatusFilter::Incomplete.completed(), Some(false));
}

#[test]
fn status_filter_defaults_to_all() {
    assert_eq!(StatusFilter::default(), StatusFilter::All);
}

#[test]
fn validate_title_accepts_text() {
    assert!(validate_title("Walk the dog").is_ok());
    assert!(validate_title("  padded  ").is_ok());
}

#[test]
fn validate_title_accepts_whitespace_only() {
    for title in [" ", "   ", "\t\n"] {
        assert!(validate_title(title).is_ok(), "rejected {:?}", title);
    }
}

#[test]
fn validate_title_rejects_empty() {
    let err = validate_title("").unwrap_err();
    assert!(matches!(err, crate::db::DbError::Validation { .. }));
    assert!(err.to_string().contains("title must not be empty"));
}
