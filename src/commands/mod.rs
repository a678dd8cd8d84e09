use clap::Args;
use std::path::PathBuf;

use bundleboy::{BuildContext, BundleManifest, ManifestSource};

pub type CmdResult<T> = bundleboy::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Shared arguments selecting the build root and the manifest to run.
#[derive(Args, Default, Debug)]
pub struct TargetArgs {
    /// Build root directory (patterns and the dist tree resolve against it)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Explicit manifest file (default: bundleboy.json at the build root,
    /// falling back to the built-in pipeline)
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

impl TargetArgs {
    /// Resolve the effective manifest and the context threaded into every
    /// selection and execution.
    pub fn resolve(&self) -> bundleboy::Result<(BundleManifest, ManifestSource, BuildContext)> {
        let (manifest, source) =
            bundleboy::manifest::resolve(&self.root, self.manifest.as_deref())?;
        let ctx = BuildContext::new(self.root.clone(), &manifest);
        Ok((manifest, source, ctx))
    }
}

pub mod build;
pub mod clean;
pub mod manifest;
pub mod task;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (bundleboy::Result<serde_json::Value>, i32) {
    crate::tty::status("bundleboy is working...");

    match command {
        crate::Commands::Build(args) => dispatch!(args, global, build),
        crate::Commands::Task(args) => dispatch!(args, global, task),
        crate::Commands::Clean(args) => dispatch!(args, global, clean),
        crate::Commands::Manifest(args) => dispatch!(args, global, manifest),
    }
}
