use clap::{Args, Subcommand};
use serde::Serialize;

use bundleboy::BundleManifest;

use crate::commands::{CmdResult, TargetArgs};

#[derive(Args)]
pub struct ManifestArgs {
    #[command(subcommand)]
    command: ManifestCommand,
}

#[derive(Subcommand)]
enum ManifestCommand {
    /// Print the effective manifest as JSON
    Show {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Print where the effective manifest was resolved from
    Path {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ManifestOutput {
    Show(ManifestShowOutput),
    Path(ManifestPathOutput),
}

#[derive(Serialize)]
pub struct ManifestShowOutput {
    pub command: String,
    pub source: String,
    pub manifest: BundleManifest,
}

#[derive(Serialize)]
pub struct ManifestPathOutput {
    pub command: String,
    pub source: String,
}

pub fn run(args: ManifestArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ManifestOutput> {
    match args.command {
        ManifestCommand::Show { target } => {
            let (manifest, source, _ctx) = target.resolve()?;

            Ok((
                ManifestOutput::Show(ManifestShowOutput {
                    command: "manifest.show".to_string(),
                    source: source.describe(),
                    manifest,
                }),
                0,
            ))
        }
        ManifestCommand::Path { target } => {
            let (_manifest, source, _ctx) = target.resolve()?;

            Ok((
                ManifestOutput::Path(ManifestPathOutput {
                    command: "manifest.path".to_string(),
                    source: source.describe(),
                }),
                0,
            ))
        }
    }
}
