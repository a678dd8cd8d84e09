use std::path::{Path, PathBuf};

/// One file's content flowing through a task's transform chain.
///
/// `rel` is the path relative to the selection base of the pattern that
/// matched it, and doubles as the destination-relative output path. Stages
/// never mutate an artifact; they produce new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub rel: PathBuf,
    pub bytes: Vec<u8>,
    /// Originating file on disk, for diagnostics. `None` for artifacts
    /// synthesized by a stage (e.g. concatenation output).
    pub source: Option<PathBuf>,
}

impl Artifact {
    pub fn new(rel: impl Into<PathBuf>, bytes: Vec<u8>, source: Option<PathBuf>) -> Self {
        Self {
            rel: rel.into(),
            bytes,
            source,
        }
    }

    /// Synthesized artifact with no on-disk origin.
    pub fn synthesized(rel: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self::new(rel, bytes, None)
    }

    pub fn file_name(&self) -> String {
        self.rel
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    pub fn extension(&self) -> Option<String> {
        self.rel
            .extension()
            .map(|e| e.to_string_lossy().to_string())
    }

    /// Display form of the origin, falling back to the relative name.
    pub fn origin(&self) -> String {
        self.source
            .as_deref()
            .map(Path::display)
            .map(|d| d.to_string())
            .unwrap_or_else(|| self.rel.display().to_string())
    }
}
