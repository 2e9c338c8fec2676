//! Parse story points from a single title

use storypoints::badge::badges;
use storypoints::output::{OutputMode, ParseReport};
use storypoints::points::parse_title;

/// Parse one card title and render the result
pub fn parse(title: &str, mode: OutputMode) -> anyhow::Result<()> {
    let points = parse_title(title);

    let report = ParseReport {
        title: title.to_string(),
        points,
        badges: points.as_ref().map(badges).unwrap_or_default(),
    };

    report.render(mode);
    Ok(())
}
