//! Board snapshot model
//!
//! Loads the JSON shape of a Trello board export (lists plus a flat card
//! array keyed by `idList`) into a snapshot the scanner can walk. The
//! snapshot is plain data: the scanner never touches the filesystem and the
//! loader never parses titles.
//!
//! # Examples
//!
//! ```
//! use storypoints::board::Board;
//!
//! let json = r#"{
//!     "name": "Sprint 12",
//!     "lists": [{"id": "l1", "name": "Doing", "closed": false}],
//!     "cards": [{"name": "(5) Fix login", "idList": "l1", "closed": false}]
//! }"#;
//! let board = Board::from_json(json).unwrap();
//! assert_eq!(board.lists[0].titles, vec!["(5) Fix login"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a board snapshot
#[derive(Debug, Error)]
pub enum BoardError {
    /// Snapshot file could not be read
    #[error("failed to read board export {path}: {source}")]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Snapshot content is not a valid board export
    #[error("invalid board export: {0}")]
    Json(#[from] serde_json::Error),
}

/// A list in a board export
#[derive(Debug, Deserialize)]
struct ExportList {
    id: String,
    name: String,
    #[serde(default)]
    closed: bool,
}

/// A card in a board export
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportCard {
    name: String,
    id_list: String,
    #[serde(default)]
    closed: bool,
}

/// The subset of a Trello board export this tool reads
#[derive(Debug, Deserialize)]
struct Export {
    #[serde(default)]
    name: String,
    lists: Vec<ExportList>,
    cards: Vec<ExportCard>,
}

/// One list with its card titles, in export order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// List name as shown in the board header
    pub name: String,
    /// Current title text of every open card in the list
    pub titles: Vec<String>,
}

/// An immutable snapshot of one board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Board name from the export, possibly empty
    pub name: String,
    /// Open lists in export order
    pub lists: Vec<ListSnapshot>,
}

impl Board {
    /// Load a board snapshot from an export file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a board snapshot from export JSON
    ///
    /// Archived (`closed`) lists and cards are skipped. Cards referencing a
    /// list that is missing or archived are skipped with a debug log rather
    /// than failing the whole load.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let export: Export = serde_json::from_str(json)?;

        let mut lists: Vec<(&str, ListSnapshot)> = export
            .lists
            .iter()
            .filter(|l| !l.closed)
            .map(|l| {
                (
                    l.id.as_str(),
                    ListSnapshot {
                        name: l.name.clone(),
                        titles: Vec::new(),
                    },
                )
            })
            .collect();

        for card in export.cards.iter().filter(|c| !c.closed) {
            match lists.iter_mut().find(|(id, _)| *id == card.id_list) {
                Some((_, list)) => list.titles.push(card.name.clone()),
                None => {
                    debug!("skipping card in unknown or archived list {}: {:?}", card.id_list, card.name);
                },
            }
        }

        Ok(Self {
            name: export.name,
            lists: lists.into_iter().map(|(_, list)| list).collect(),
        })
    }
}
