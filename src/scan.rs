//! Full board scan pass
//!
//! One pass walks every open list and card in a snapshot, parses each title,
//! and produces a complete report: per-card badges plus per-list totals.
//! Each pass recomputes everything from the snapshot it is given, so
//! repeating a scan on unchanged input yields an identical report and a
//! fresh snapshot always wins over any earlier result.

use log::debug;
use serde::Serialize;

use crate::badge::{Badge, badges};
use crate::board::{Board, ListSnapshot};
use crate::points::parse_title;
use crate::totals::{ListTotals, aggregate};

/// One card's annotation in a scan report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardReport {
    /// The title as it appeared in the snapshot
    pub title: String,
    /// Badges to render on this card; empty for unpointed cards
    pub badges: Vec<Badge>,
}

/// One list's annotation in a scan report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListReport {
    /// List name
    pub name: String,
    /// Per-card annotations, in list order
    pub cards: Vec<CardReport>,
    /// Totals for the list header, or `None` when no card carries points
    pub totals: Option<ListTotals>,
}

/// The result of scanning one board snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    /// Board name from the snapshot
    pub board: String,
    /// Per-list annotations
    pub lists: Vec<ListReport>,
}

/// Scan a board snapshot into a report
#[must_use]
pub fn scan_board(board: &Board) -> BoardReport {
    let lists: Vec<ListReport> = board.lists.iter().map(scan_list).collect();

    let pointed: usize = lists
        .iter()
        .filter_map(|l| l.totals.map(|t| t.contributing_cards))
        .sum();
    debug!("scanned {} list(s), {} pointed card(s)", lists.len(), pointed);

    BoardReport {
        board: board.name.clone(),
        lists,
    }
}

fn scan_list(list: &ListSnapshot) -> ListReport {
    let cards = list
        .titles
        .iter()
        .map(|title| CardReport {
            title: title.clone(),
            badges: parse_title(title).map(|p| badges(&p)).unwrap_or_default(),
        })
        .collect();

    ListReport {
        name: list.name.clone(),
        cards,
        totals: aggregate(&list.titles),
    }
}
