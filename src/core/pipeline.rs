//! Pipeline runner: validates the declared sequence, then executes it
//! strictly in order, one task at a time.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::core::manifest::{BuildContext, BundleManifest};
use crate::core::task::{self, TaskReport};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub version: String,
    pub dist: String,
    pub tasks: Vec<TaskReport>,
    pub summary: RunSummary,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_tasks: usize,
    pub files_written: usize,
}

/// Fail fast, before anything executes: duplicate task names, sequence
/// entries that resolve to no declared task, malformed rename stages.
pub fn validate(manifest: &BundleManifest) -> Result<()> {
    let mut names = HashSet::new();
    for spec in &manifest.tasks {
        if !names.insert(spec.name.as_str()) {
            return Err(Error::validation_invalid_argument(
                "tasks",
                format!("Duplicate task name '{}'", spec.name),
                Some(spec.name.clone()),
                None,
            ));
        }

        for stage in &spec.stages {
            stage
                .validate()
                .map_err(|e| e.with_hint(format!("In task '{}'", spec.name)))?;
        }
    }

    for name in &manifest.sequence {
        if !names.contains(name.as_str()) {
            return Err(Error::task_not_found(name.clone())
                .with_hint("Listed in 'sequence' but not declared in 'tasks'"));
        }
    }

    Ok(())
}

/// Run the full declared sequence in order. Each task fully completes
/// before the next starts; the first failure halts the run. Outputs of
/// tasks that already completed are left in place.
pub fn run(manifest: &BundleManifest, ctx: &BuildContext) -> Result<RunReport> {
    validate(manifest)?;

    let mut reports: Vec<TaskReport> = Vec::with_capacity(manifest.sequence.len());
    for name in &manifest.sequence {
        let spec = manifest
            .task(name)
            .ok_or_else(|| Error::task_not_found(name.clone()))?;

        log_status!("build", "Running task '{}'", name);
        let report = task::execute(spec, ctx).map_err(|e| {
            let completed: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
            let err = e.with_hint(format!("Task '{}' failed", name));
            if completed.is_empty() {
                err
            } else {
                err.with_hint(format!(
                    "Completed before the failure (outputs left in place): {}",
                    completed.join(", ")
                ))
            }
        })?;
        reports.push(report);
    }

    let files_written = reports.iter().map(|r| r.written.len()).sum();
    Ok(RunReport {
        version: ctx.version.clone(),
        dist: ctx.dist.display().to_string(),
        summary: RunSummary {
            total_tasks: reports.len(),
            files_written,
        },
        tasks: reports,
    })
}

/// Run a single named task: the partial-rebuild entry point.
pub fn run_task(manifest: &BundleManifest, ctx: &BuildContext, name: &str) -> Result<TaskReport> {
    validate(manifest)?;

    let spec = manifest
        .task(name)
        .ok_or_else(|| Error::task_not_found(name.to_string()))?;

    log_status!("build", "Running task '{}'", name);
    task::execute(spec, ctx)
}
