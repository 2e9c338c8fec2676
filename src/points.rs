//! Story point parsing from card titles
//!
//! Card titles carry up to two point tokens:
//! - Estimate in parentheses: `(5)`, `(2.5)`, `(?)`
//! - Used points in brackets: `[3]`, `[?]`
//!
//! The two tokens are matched independently, so either may appear anywhere
//! in the title (or not at all). `?` marks a value that is intentionally
//! unspecified; it renders as a badge but never contributes to totals.
//!
//! # Examples
//!
//! ```
//! use storypoints::points::{parse_title, PointValue};
//!
//! let points = parse_title("(5) Fix login [3]").unwrap();
//! assert_eq!(points.estimate, PointValue::Number(5.0));
//! assert_eq!(points.used, PointValue::Number(3.0));
//!
//! assert!(parse_title("Fix login").is_none());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches an estimate token: `(5)`, `(2.5)`, `(?)`
static ESTIMATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([?\d]+(?:\.\d+)?)\)").expect("estimate pattern is valid"));

/// Matches a used points token: `[3]`, `[0.5]`, `[?]`
static USED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([?\d]+(?:\.\d+)?)\]").expect("used pattern is valid"));

/// The literal marker for an intentionally unspecified value
pub const UNKNOWN_MARKER: &str = "?";

/// A single point field parsed from a title
///
/// `Absent`, `Unknown`, and `Number(0)` are three distinct states:
/// - `Absent` never renders and never contributes to totals
/// - `Unknown` renders the `?` marker but never contributes to totals
/// - `Number(0.0)` renders a `0` badge and contributes 0 to totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum PointValue {
    /// A non-negative decimal point count
    Number(f64),
    /// The literal `?` placeholder
    Unknown,
    /// No token of this kind was present in the title
    #[default]
    Absent,
}

impl PointValue {
    /// Whether this field carries no token at all
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The numeric value, if this field contributes to totals
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Unknown | Self::Absent => None,
        }
    }

    /// The text this field renders as, or `None` for `Absent`
    ///
    /// Numbers render with their exact decimal value (`5`, `2.5`, `0`),
    /// never rounded. `Unknown` renders the literal marker.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(n.to_string()),
            Self::Unknown => Some(UNKNOWN_MARKER.to_string()),
            Self::Absent => None,
        }
    }
}

/// Story points parsed from one card title
///
/// Built fresh on every scan pass from the current title text and discarded
/// afterwards; nothing is cached across passes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CardPoints {
    /// Planned points, from the parenthesized token
    pub estimate: PointValue,
    /// Consumed points, from the bracketed token
    pub used: PointValue,
}

/// Parse story points from a card title
///
/// Returns `None` when the title contains neither token: the card carries
/// no point data and is excluded from list card counts entirely. When at
/// least one token is present, each field resolves independently, so a card
/// may have an estimate and no used value or vice versa.
#[must_use]
pub fn parse_title(title: &str) -> Option<CardPoints> {
    let estimate_body = ESTIMATE_RE.captures(title).and_then(|c| c.get(1)).map(|m| m.as_str());
    let used_body = USED_RE.captures(title).and_then(|c| c.get(1)).map(|m| m.as_str());

    if estimate_body.is_none() && used_body.is_none() {
        return None;
    }

    Some(CardPoints {
        estimate: resolve(estimate_body),
        used: resolve(used_body),
    })
}

/// Resolve a matched token body into a point value
///
/// A body that matched the grammar but fails the decimal parse (or parses
/// non-finite) resolves to `Absent`, never to `Number(0)` and never to an
/// error. The surrounding card still counts as pointed because a token was
/// present.
fn resolve(body: Option<&str>) -> PointValue {
    let Some(body) = body else {
        return PointValue::Absent;
    };
    if body == UNKNOWN_MARKER {
        return PointValue::Unknown;
    }
    match body.parse::<f64>() {
        Ok(n) if n.is_finite() => PointValue::Number(n),
        _ => PointValue::Absent,
    }
}
