use std::path::{Path, PathBuf};

/// Replace the literal `{version}` placeholder in an output-name template.
///
/// Every version-stamped name in one run goes through this with the same
/// tag, so all stamped artifacts share one version string.
pub fn interpolate_version(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

/// Build a `<logical>.<version>.<ext>` filename.
pub fn versioned_filename(logical: &str, version: &str, ext: &str) -> String {
    format!("{}.{}.{}", logical, version, ext)
}

/// Resolve a task's destination directory under the distribution root.
/// An empty `dest` targets the distribution root itself.
pub fn dest_dir(dist: &Path, dest: &str) -> PathBuf {
    if dest.is_empty() {
        dist.to_path_buf()
    } else {
        dist.join(dest)
    }
}
