//! storypoints - Annotate Trello board exports with story point badges and
//! per-list totals
//!
//! This library parses story point tokens out of card titles: `(5)` for
//! estimates, `[3]` for used points, `?` for intentionally unspecified
//! values. It reduces them into per-list totals, without ever writing
//! back to the board data it reads.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod badge;
pub mod board;
pub mod output;
pub mod points;
pub mod scan;
pub mod totals;
