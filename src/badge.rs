//! Badge and totals label content
//!
//! Turns parsed point data into the exact text a renderer displays: one
//! badge per present point field and two `Est:`/`Used:` labels per list
//! with totals. This module owns the content decisions only; colors and
//! layout belong to the output layer.

use std::fmt;

use serde::Serialize;

use crate::points::CardPoints;
use crate::totals::ListTotals;

/// Which point field a badge displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    /// Planned points, from the parenthesized token
    Estimate,
    /// Consumed points, from the bracketed token
    Used,
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Estimate => write!(f, "estimate"),
            Self::Used => write!(f, "used"),
        }
    }
}

/// One rendered point badge on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Field this badge displays
    pub kind: BadgeKind,
    /// Display text: the exact decimal value, or the `?` marker
    pub label: String,
}

/// Derive the badges for one card's parsed points
///
/// One badge per non-absent field. An explicit `(0)` or `[0]` still gets a
/// badge labeled `0`; only truly absent fields render nothing.
#[must_use]
pub fn badges(points: &CardPoints) -> Vec<Badge> {
    let mut badges = Vec::with_capacity(2);
    if let Some(label) = points.estimate.label() {
        badges.push(Badge {
            kind: BadgeKind::Estimate,
            label,
        });
    }
    if let Some(label) = points.used.label() {
        badges.push(Badge {
            kind: BadgeKind::Used,
            label,
        });
    }
    badges
}

/// The two summary labels for a list's totals
///
/// Both labels always render together once a list has any contributing
/// card, even when one total is zero. Suppression of both (for lists with
/// no pointed cards) is signaled upstream by `aggregate` returning `None`.
#[must_use]
pub fn totals_labels(totals: &ListTotals) -> (String, String) {
    (
        format!("Est: {}", totals.total_estimate),
        format!("Used: {}", totals.total_used),
    )
}
