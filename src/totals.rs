//! Per-list totals over parsed card titles
//!
//! Reduces the titles belonging to one list into running estimate and used
//! totals. The reduction is a full recomputation each pass, so there is no
//! incremental state to drift out of sync with the board.

use serde::Serialize;

use crate::points::parse_title;

/// Totals for one list
///
/// Only produced when at least one card contributed; see [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListTotals {
    /// Sum of all numeric estimate values (`?` and absent fields add nothing)
    pub total_estimate: f64,
    /// Sum of all numeric used values
    pub total_used: f64,
    /// Cards whose title carried at least one point token
    pub contributing_cards: usize,
}

/// Reduce a list's card titles into totals
///
/// Titles without any point token are excluded entirely: not counted, not
/// summed. A title with at least one token counts as one contributing card
/// even when its fields are all `?` or unresolved. Numeric fields add their
/// value to the matching total, including explicit zeros, which is why a
/// list of `(0)` cards yields `Some` with a visible 0 total.
///
/// Returns `None` when no card contributed (including empty input), which
/// callers must treat as "render nothing" rather than `Est: 0 / Used: 0`.
///
/// Summation is commutative, so the result is independent of title order.
pub fn aggregate<I, S>(titles: I) -> Option<ListTotals>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total_estimate = 0.0;
    let mut total_used = 0.0;
    let mut contributing_cards = 0;

    for title in titles {
        let Some(points) = parse_title(title.as_ref()) else {
            continue;
        };
        contributing_cards += 1;
        if let Some(n) = points.estimate.as_number() {
            total_estimate += n;
        }
        if let Some(n) = points.used.as_number() {
            total_used += n;
        }
    }

    if contributing_cards == 0 {
        return None;
    }

    Some(ListTotals {
        total_estimate,
        total_used,
        contributing_cards,
    })
}
