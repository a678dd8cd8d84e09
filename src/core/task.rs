//! Task execution: select inputs once, fold them through the stage chain
//! once, write the results into the destination directory.

use serde::Serialize;

use crate::core::error::Result;
use crate::core::manifest::{BuildContext, TaskSpec};
use crate::core::{paths, selector, stage};
use crate::utils::io;

/// What a task did, surfaced to the CLI layer. The pipeline runner consults
/// nothing here beyond `Ok`/`Err`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    pub name: String,
    pub matched: usize,
    pub written: Vec<String>,
}

/// Run one task to completion. Filesystem writes are the only side effect;
/// destination directories are created as needed.
pub fn execute(spec: &TaskSpec, ctx: &BuildContext) -> Result<TaskReport> {
    let selected = selector::select(&ctx.root, &spec.src, spec.dedupe)?;
    log_status!("task", "'{}' matched {} file(s)", spec.name, selected.len());
    let matched = selected.len();

    let outputs = stage::apply_chain(&spec.stages, selected, &ctx.version)?;

    let dest = paths::dest_dir(&ctx.dist, &spec.dest);
    let mut written = Vec::with_capacity(outputs.len());
    for artifact in &outputs {
        let target = dest.join(&artifact.rel);
        if let Some(parent) = target.parent() {
            io::ensure_dir(parent)?;
        }
        io::write_bytes(
            &target,
            &artifact.bytes,
            &format!("write {}", target.display()),
        )?;

        let shown = target
            .strip_prefix(&ctx.root)
            .unwrap_or(&target)
            .to_string_lossy()
            .replace('\\', "/");
        written.push(shown);
    }

    Ok(TaskReport {
        name: spec.name.clone(),
        matched,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::BundleManifest;
    use crate::core::stage::Stage;
    use std::fs;
    use tempfile::TempDir;

    fn context(root: &std::path::Path) -> BuildContext {
        let manifest = BundleManifest {
            version: "1.0.2.0".to_string(),
            dist: "dist".to_string(),
            tasks: Vec::new(),
            sequence: Vec::new(),
        };
        BuildContext::new(root, &manifest)
    }

    #[test]
    fn execute_writes_stage_outputs_under_dest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("app")).unwrap();
        fs::write(dir.path().join("app/app.js"), "var shell=1;").unwrap();

        let spec = TaskSpec {
            name: "lightwave-app-ui-js".to_string(),
            src: vec!["./app/app.js".to_string()],
            dedupe: true,
            stages: vec![Stage::Concat {
                output: "lightwave-app-ui.{version}.js".to_string(),
            }],
            dest: "idm/js".to_string(),
        };

        let report = execute(&spec, &context(dir.path())).unwrap();
        assert_eq!(report.matched, 1);
        assert_eq!(report.written, vec!["dist/idm/js/lightwave-app-ui.1.0.2.0.js"]);

        let output = dir.path().join("dist/idm/js/lightwave-app-ui.1.0.2.0.js");
        assert_eq!(fs::read_to_string(output).unwrap(), "var shell=1;");
    }

    #[test]
    fn execute_mirrors_selection_tree_into_dest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("app/src/sso")).unwrap();
        fs::write(dir.path().join("app/src/home.html"), "<p>  home  </p>").unwrap();
        fs::write(dir.path().join("app/src/sso/login.html"), "<p>  login  </p>").unwrap();

        let spec = TaskSpec {
            name: "lightwave-ui-html-minify".to_string(),
            src: vec!["./app/src/**/*.html".to_string()],
            dedupe: true,
            stages: vec![Stage::MinifyHtml],
            dest: "idm".to_string(),
        };

        execute(&spec, &context(dir.path())).unwrap();

        let home = fs::read_to_string(dir.path().join("dist/idm/home.html")).unwrap();
        assert_eq!(home, "<p> home </p>");
        let login = fs::read_to_string(dir.path().join("dist/idm/sso/login.html")).unwrap();
        assert_eq!(login, "<p> login </p>");
    }

    #[test]
    fn execute_with_no_matches_writes_nothing() {
        let dir = TempDir::new().unwrap();

        let spec = TaskSpec {
            name: "lightwave-ui-copy-assets".to_string(),
            src: vec!["./app/assets/*.png".to_string()],
            dedupe: true,
            stages: vec![Stage::Copy],
            dest: "idm/assets".to_string(),
        };

        let report = execute(&spec, &context(dir.path())).unwrap();
        assert_eq!(report.matched, 0);
        assert!(report.written.is_empty());
        assert!(!dir.path().join("dist").exists());
    }
}
