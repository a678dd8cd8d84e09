//! Input selection: ordered glob patterns resolved into artifact lists.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::artifact::Artifact;
use crate::core::error::{Error, Result};
use crate::utils::io;

/// Resolve an ordered pattern list against a build root.
///
/// Output order is pattern-list order first, then lexicographic path order
/// within each pattern's matches. Downstream concatenation depends on this
/// order for byte-identical output across runs.
///
/// With `dedupe` set, a file already selected by an earlier pattern is
/// skipped when a later pattern matches it again; without it, every match
/// is included once per matching pattern.
///
/// A pattern that matches nothing (including one rooted in a directory that
/// does not exist) yields no artifacts and no error.
pub fn select(root: &Path, patterns: &[String], dedupe: bool) -> Result<Vec<Artifact>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut artifacts = Vec::new();

    for pattern in patterns {
        let normalized = normalize(pattern);
        let base_dir = root.join(glob_base(&normalized));
        let full_pattern = root.join(&normalized);

        let entries = glob::glob(&full_pattern.to_string_lossy())
            .map_err(|e| Error::select_invalid_pattern(pattern.clone(), e.to_string()))?;

        let mut matches = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("resolve {}", pattern)))
            })?;
            if path.is_file() {
                matches.push(path);
            }
        }
        matches.sort();

        for path in matches {
            if dedupe && !seen.insert(path.clone()) {
                continue;
            }

            let rel = path
                .strip_prefix(&base_dir)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| PathBuf::from(path.file_name().unwrap_or_default()));
            let bytes = io::read_bytes(&path, &format!("read {}", path.display()))?;
            artifacts.push(Artifact::new(rel, bytes, Some(path)));
        }
    }

    Ok(artifacts)
}

/// Strip the `./` prefix conventionally used in pattern declarations.
fn normalize(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

/// The non-glob directory prefix of a pattern.
///
/// Matched paths are made relative to this base, so recursive patterns
/// mirror their subtree into the destination. A fully literal pattern's
/// base is its parent directory (the match keeps only its file name).
fn glob_base(pattern: &str) -> String {
    let parts: Vec<&str> = pattern.split('/').collect();
    let mut literal = Vec::new();

    for part in &parts {
        if contains_glob_chars(part) {
            break;
        }
        literal.push(*part);
    }

    if literal.len() == parts.len() {
        literal.pop();
    }

    literal.join("/")
}

fn contains_glob_chars(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[') || s.contains(']')
}
