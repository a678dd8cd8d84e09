use clap::Args;
use serde::Serialize;

use bundleboy::pipeline::{self, RunReport};

use crate::commands::{CmdResult, TargetArgs};

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Serialize)]
pub struct BuildOutput {
    pub command: String,
    pub manifest: String,
    #[serde(flatten)]
    pub report: RunReport,
}

/// Run the full declared task sequence, in order.
pub fn run(args: BuildArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<BuildOutput> {
    let (manifest, source, ctx) = args.target.resolve()?;

    let report = pipeline::run(&manifest, &ctx)?;

    Ok((
        BuildOutput {
            command: "build.run".to_string(),
            manifest: source.describe(),
            report,
        },
        0,
    ))
}
