//! Scan a board export and render badges and totals

use std::path::Path;

use anyhow::Context;
use log::debug;

use storypoints::board::Board;
use storypoints::output::OutputMode;
use storypoints::scan::scan_board;

/// Scan a board export file, optionally filtered to one list
pub fn scan(path: &Path, list: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let board = Board::load(path).with_context(|| format!("cannot load board export {}", path.display()))?;

    debug!(
        "loaded board {:?} with {} list(s)",
        board.name,
        board.lists.len()
    );

    let mut report = scan_board(&board);

    if let Some(name) = list {
        report.lists.retain(|l| l.name == name);
        if report.lists.is_empty() {
            anyhow::bail!("no list named {name:?} in {}", path.display());
        }
    }

    report.render(mode);
    Ok(())
}
