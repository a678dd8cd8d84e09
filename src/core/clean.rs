//! Destructive distribution-tree cleanup.
//!
//! Deliberately never wired into the default sequence: a build does not
//! wipe its own output root. Cleaning is invoked explicitly via
//! `bundleboy clean`.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::error::{Error, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanReport {
    pub removed: bool,
    pub path: String,
}

/// Remove the distribution root recursively. An absent root is a no-op.
pub fn run(dist: &Path) -> Result<CleanReport> {
    if !dist.exists() {
        return Ok(CleanReport {
            removed: false,
            path: dist.display().to_string(),
        });
    }

    fs::remove_dir_all(dist).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("remove {}", dist.display())))
    })?;

    log_status!("clean", "Removed {}", dist.display());
    Ok(CleanReport {
        removed: true,
        path: dist.display().to_string(),
    })
}
