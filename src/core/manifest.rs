//! Bundle manifest: the declared tasks, their execution sequence, and the
//! process-wide version tag.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::defaults;
use crate::core::error::{Error, Result};
use crate::core::stage::Stage;
use crate::utils::io;

/// File name probed at the build root for a manifest override.
pub const MANIFEST_FILE: &str = "bundleboy.json";

/// A named unit of the pipeline: input patterns, transform chain, output
/// directory. Declared once, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub name: String,

    /// Ordered glob patterns, resolved relative to the build root.
    pub src: Vec<String>,

    /// Skip files a later pattern re-matches. Off restores literal
    /// once-per-pattern fan-out for overlapping patterns.
    #[serde(default = "default_dedupe")]
    pub dedupe: bool,

    #[serde(default)]
    pub stages: Vec<Stage>,

    /// Output directory relative to the distribution root; empty targets
    /// the distribution root itself.
    #[serde(default)]
    pub dest: String,
}

fn default_dedupe() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    /// The version tag stamped into versioned output filenames. One run,
    /// one tag.
    pub version: String,

    /// Distribution root, relative to the build root.
    #[serde(default = "default_dist")]
    pub dist: String,

    pub tasks: Vec<TaskSpec>,

    /// Execution order for a full build. Every entry must name a declared
    /// task; order here is the only scheduling policy there is.
    pub sequence: Vec<String>,
}

fn default_dist() -> String {
    "dist".to_string()
}

impl BundleManifest {
    pub fn task(&self, name: &str) -> Option<&TaskSpec> {
        self.tasks.iter().find(|t| t.name == name)
    }
}

/// Explicit configuration threaded into every selection and execution;
/// nothing reads ambient process state.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub root: PathBuf,
    pub dist: PathBuf,
    pub version: String,
}

impl BuildContext {
    pub fn new(root: impl Into<PathBuf>, manifest: &BundleManifest) -> Self {
        let root = root.into();
        let dist = root.join(&manifest.dist);
        Self {
            root,
            dist,
            version: manifest.version.clone(),
        }
    }
}

/// Where the effective manifest came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestSource {
    Builtin,
    File(PathBuf),
}

impl ManifestSource {
    pub fn describe(&self) -> String {
        match self {
            ManifestSource::Builtin => "builtin".to_string(),
            ManifestSource::File(path) => path.display().to_string(),
        }
    }
}

/// Load a manifest from an explicit JSON file.
pub fn load(path: &Path) -> Result<BundleManifest> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Resolve the effective manifest: an explicit `--manifest` file wins, then
/// `bundleboy.json` at the build root, then the built-in pipeline.
pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<(BundleManifest, ManifestSource)> {
    if let Some(path) = explicit {
        return Ok((load(path)?, ManifestSource::File(path.to_path_buf())));
    }

    let candidate = root.join(MANIFEST_FILE);
    if candidate.exists() {
        return Ok((load(&candidate)?, ManifestSource::File(candidate)));
    }

    Ok((defaults::manifest(), ManifestSource::Builtin))
}
