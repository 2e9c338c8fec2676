//! Output formatting for human and JSON modes
//!
//! Scan and parse reports render either as human-readable text (badges
//! painted in the board's bubble palette) or as machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::badge::{Badge, BadgeKind, totals_labels};
use crate::points::CardPoints;
use crate::scan::BoardReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of parsing a single title
#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// The title that was parsed
    pub title: String,
    /// Parsed points, or `None` when the title carries no point token
    pub points: Option<CardPoints>,
    /// Badges the card would display
    pub badges: Vec<Badge>,
}

/// Paint one badge in the bubble palette: blue for estimates, green for used
fn paint(badge: &Badge) -> String {
    let text = format!(" {} ", badge.label);
    match badge.kind {
        BadgeKind::Estimate => text.white().on_blue().bold().to_string(),
        BadgeKind::Used => text.white().on_green().bold().to_string(),
    }
}

impl BoardReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.board.is_empty() {
            println!("{}\n", self.board.bold());
        }

        for list in &self.lists {
            match &list.totals {
                Some(totals) => {
                    let (est, used) = totals_labels(totals);
                    println!(
                        "{}  {} {}",
                        list.name.bold(),
                        format!(" {est} ").black().on_yellow(),
                        format!(" {used} ").white().on_green(),
                    );
                },
                None => println!("{}", list.name.bold()),
            }

            for card in &list.cards {
                if card.badges.is_empty() {
                    println!("  {}", card.title);
                } else {
                    let bubbles: Vec<String> = card.badges.iter().map(paint).collect();
                    println!("  {} {}", bubbles.join(" "), card.title);
                }
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ParseReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.points {
            None => println!("No story points in {:?}", self.title),
            Some(points) => {
                let bubbles: Vec<String> = self.badges.iter().map(paint).collect();
                println!("{} {}", bubbles.join(" "), self.title);
                println!("  estimate: {}", field_text(points.estimate.label()));
                println!("  used:     {}", field_text(points.used.label()));
            },
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn field_text(label: Option<String>) -> String {
    label.unwrap_or_else(|| "none".to_string())
}
