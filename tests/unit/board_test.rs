//! Tests for board export loading

use storypoints::board::{Board, BoardError};

const EXPORT: &str = r#"{
    "name": "Sprint 12",
    "lists": [
        {"id": "l1", "name": "Doing", "closed": false},
        {"id": "l2", "name": "Done", "closed": false},
        {"id": "l3", "name": "Old sprint", "closed": true}
    ],
    "cards": [
        {"name": "(5) Fix login [3]", "idList": "l1", "closed": false},
        {"name": "(3) Update docs", "idList": "l1", "closed": false},
        {"name": "(2) Shipped [2]", "idList": "l2", "closed": false},
        {"name": "(8) Archived card", "idList": "l1", "closed": true},
        {"name": "(1) In archived list", "idList": "l3", "closed": false},
        {"name": "(4) Orphan", "idList": "missing", "closed": false}
    ]
}"#;

#[test]
fn test_loads_lists_in_export_order() {
    let board = Board::from_json(EXPORT).unwrap();
    assert_eq!(board.name, "Sprint 12");
    assert_eq!(board.lists.len(), 2);
    assert_eq!(board.lists[0].name, "Doing");
    assert_eq!(board.lists[1].name, "Done");
}

#[test]
fn test_groups_cards_under_their_list() {
    let board = Board::from_json(EXPORT).unwrap();
    assert_eq!(
        board.lists[0].titles,
        vec!["(5) Fix login [3]", "(3) Update docs"]
    );
    assert_eq!(board.lists[1].titles, vec!["(2) Shipped [2]"]);
}

#[test]
fn test_skips_closed_lists_and_cards() {
    let board = Board::from_json(EXPORT).unwrap();
    assert!(board.lists.iter().all(|l| l.name != "Old sprint"));
    let all_titles: Vec<&str> = board
        .lists
        .iter()
        .flat_map(|l| l.titles.iter().map(String::as_str))
        .collect();
    assert!(!all_titles.iter().any(|t| t.contains("Archived")));
}

#[test]
fn test_skips_orphan_cards_without_failing() {
    let board = Board::from_json(EXPORT).unwrap();
    let all_titles: Vec<&str> = board
        .lists
        .iter()
        .flat_map(|l| l.titles.iter().map(String::as_str))
        .collect();
    assert!(!all_titles.iter().any(|t| t.contains("Orphan")));
}

#[test]
fn test_missing_name_defaults_to_empty() {
    let board = Board::from_json(r#"{"lists": [], "cards": []}"#).unwrap();
    assert_eq!(board.name, "");
    assert!(board.lists.is_empty());
}

#[test]
fn test_invalid_json_is_a_json_error() {
    let err = Board::from_json("not json").unwrap_err();
    assert!(matches!(err, BoardError::Json(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = Board::load("/nonexistent/board.json").unwrap_err();
    assert!(matches!(err, BoardError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/board.json"));
}
