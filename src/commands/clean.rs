use clap::Args;
use serde::Serialize;

use bundleboy::clean::{self, CleanReport};

use crate::commands::{CmdResult, TargetArgs};

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Serialize)]
pub struct CleanOutput {
    pub command: String,
    #[serde(flatten)]
    pub report: CleanReport,
}

/// Remove the distribution tree for the effective manifest.
pub fn run(args: CleanArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<CleanOutput> {
    let (_manifest, _source, ctx) = args.target.resolve()?;

    let report = clean::run(&ctx.dist)?;

    Ok((
        CleanOutput {
            command: "clean.run".to_string(),
            report,
        },
        0,
    ))
}
