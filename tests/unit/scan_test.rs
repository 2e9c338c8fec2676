//! Tests for the board scan pass

use storypoints::board::{Board, ListSnapshot};
use storypoints::scan::scan_board;

fn board(lists: Vec<(&str, Vec<&str>)>) -> Board {
    Board {
        name: "Test board".to_string(),
        lists: lists
            .into_iter()
            .map(|(name, titles)| ListSnapshot {
                name: name.to_string(),
                titles: titles.into_iter().map(String::from).collect(),
            })
            .collect(),
    }
}

#[test]
fn test_scan_annotates_every_list() {
    let report = scan_board(&board(vec![
        ("Doing", vec!["(3) A", "(?) B [2]", "(5) C [5]"]),
        ("Backlog", vec!["Plain idea"]),
    ]));

    assert_eq!(report.board, "Test board");
    assert_eq!(report.lists.len(), 2);

    let doing = &report.lists[0];
    let totals = doing.totals.unwrap();
    assert_eq!(totals.total_estimate, 8.0);
    assert_eq!(totals.total_used, 7.0);
    assert_eq!(totals.contributing_cards, 3);

    let backlog = &report.lists[1];
    assert_eq!(backlog.totals, None);
}

#[test]
fn test_scan_keeps_unpointed_cards_without_badges() {
    let report = scan_board(&board(vec![("Doing", vec!["(3) A", "Standup notes"])]));
    let cards = &report.lists[0].cards;
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].badges.len(), 1);
    assert!(cards[1].badges.is_empty());
    assert_eq!(cards[1].title, "Standup notes");
}

#[test]
fn test_empty_list_has_no_totals() {
    let report = scan_board(&board(vec![("Empty", vec![])]));
    assert_eq!(report.lists[0].totals, None);
    assert!(report.lists[0].cards.is_empty());
}

#[test]
fn test_scan_is_idempotent() {
    let snapshot = board(vec![("Doing", vec!["(3) A", "(?) B [2]"])]);
    assert_eq!(scan_board(&snapshot), scan_board(&snapshot));
}

#[test]
fn test_report_serializes_with_totals_and_badges() {
    let report = scan_board(&board(vec![("Doing", vec!["(5) Fix login [3]"])]));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["board"], "Test board");
    assert_eq!(json["lists"][0]["name"], "Doing");
    assert_eq!(json["lists"][0]["totals"]["total_estimate"], 5.0);
    assert_eq!(json["lists"][0]["cards"][0]["badges"][0]["kind"], "estimate");
    assert_eq!(json["lists"][0]["cards"][0]["badges"][0]["label"], "5");
}

#[test]
fn test_no_totals_serializes_as_null() {
    let report = scan_board(&board(vec![("Backlog", vec!["Plain idea"])]));
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["lists"][0]["totals"].is_null());
}
