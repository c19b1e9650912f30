use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::models::{Constraints, RequiredSupplement, Supplement};

/// Everything the CLI keeps between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub supplements: Vec<Supplement>,

    #[serde(default)]
    pub constraints: Constraints,

    #[serde(default)]
    pub requirements: Vec<RequiredSupplement>,
}

/// Load a workspace from a JSON file.
///
/// Deduplicates supplements by id (last occurrence wins, first position kept).
pub fn load_workspace<P: AsRef<Path>>(path: P) -> Result<Workspace> {
    let content = fs::read_to_string(path)?;
    let mut workspace: Workspace = serde_json::from_str(&content)?;

    let mut position: HashMap<u32, usize> = HashMap::new();
    let mut deduped: Vec<Supplement> = Vec::with_capacity(workspace.supplements.len());
    for supplement in workspace.supplements {
        match position.get(&supplement.id) {
            Some(&idx) => {
                warn!(id = supplement.id, "duplicate supplement id, keeping last");
                deduped[idx] = supplement;
            }
            None => {
                position.insert(supplement.id, deduped.len());
                deduped.push(supplement);
            }
        }
    }
    workspace.supplements = deduped;

    Ok(workspace)
}

/// Load a workspace, or start empty if the file does not exist yet.
pub fn load_workspace_or_default<P: AsRef<Path>>(path: P) -> Result<Workspace> {
    if path.as_ref().exists() {
        load_workspace(path)
    } else {
        Ok(Workspace::default())
    }
}

/// Save a workspace to a JSON file.
pub fn save_workspace<P: AsRef<Path>>(path: P, workspace: &Workspace) -> Result<()> {
    let json = serde_json::to_string_pretty(workspace)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Serialize)]
struct WorkspaceSnapshot<'a> {
    timestamp: DateTime<Utc>,

    #[serde(flatten)]
    workspace: &'a Workspace,
}

/// Write a copy of the workspace stamped with `timestamp`.
///
/// The snapshot loads back with `load_workspace`; the stamp is ignored.
pub fn export_workspace<P: AsRef<Path>>(
    path: P,
    workspace: &Workspace,
    timestamp: DateTime<Utc>,
) -> Result<()> {
    let snapshot = WorkspaceSnapshot {
        timestamp,
        workspace,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}
