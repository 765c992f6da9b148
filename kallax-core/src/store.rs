//! YAML persistence for the whole collection tree.
//!
//! The on-disk document is deliberately flat: a `manager` marker at the
//! top, one node per collection, and each game flattened to a fixed-order
//! list of six strings. Model types never appear in the file directly, so
//! the format survives refactors of the in-memory representation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collection::GameCollection;
use crate::game::BoardGame;
use crate::manager::{Manager, MANAGER_NAME};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("{path} is not a collection file: {reason}")]
    BadDocument { path: String, reason: String },
}

/// One game flattened for storage: title, players, duration,
/// recommended_age, rating, times_played.
type GameRecord = [String; 6];

#[derive(Debug, Serialize, Deserialize)]
struct CollectionNode {
    name: String,
    items: Vec<GameRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ManagerNode {
    name: String,
    items: Vec<CollectionNode>,
}

/// Load a manager from the YAML file at `path`.
///
/// A file that cannot be read, cannot be parsed, or lacks the top-level
/// `manager` marker is rejected whole; callers typically fall back to a
/// fresh manager.
pub fn load_manager(path: &Path) -> Result<Manager, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let node: ManagerNode = serde_yml::from_str(&contents).map_err(|e| StoreError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    if node.name != MANAGER_NAME {
        return Err(StoreError::BadDocument {
            path: path.display().to_string(),
            reason: format!("top-level name is '{}', expected '{MANAGER_NAME}'", node.name),
        });
    }

    let collections = node.items.into_iter().map(collection_from_node).collect();
    Ok(Manager::from_collections(collections))
}

/// Serialize the whole manager tree to `path`, replacing any previous
/// file. Writes a sibling temp file first and renames it into place so a
/// failed save never truncates existing data.
pub fn save_manager(path: &Path, manager: &Manager) -> Result<(), StoreError> {
    let node = manager_node(manager);
    let contents = serde_yml::to_string(&node).map_err(|e| StoreError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, contents).map_err(|e| StoreError::Io {
        path: tmp.display().to_string(),
        source: e,
    })?;
    std::fs::rename(&tmp, path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

fn manager_node(manager: &Manager) -> ManagerNode {
    ManagerNode {
        name: MANAGER_NAME.to_string(),
        items: manager
            .collections()
            .iter()
            .map(|collection| CollectionNode {
                name: collection.name().to_string(),
                items: collection.iter().map(BoardGame::to_record).collect(),
            })
            .collect(),
    }
}

/// Loaded rows pass through [`GameCollection::add`] so name uniqueness
/// holds even for hand-edited files; losers are logged and skipped.
fn collection_from_node(node: CollectionNode) -> GameCollection {
    let mut collection = GameCollection::new(node.name);
    for record in node.items {
        let game = BoardGame::from_record(record);
        if let Err(err) = collection.add(game) {
            log::warn!("skipping game in '{}': {err}", collection.name());
        }
    }
    collection
}
