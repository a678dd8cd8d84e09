use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{build, clean, manifest, task};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "bundleboy")]
#[command(version = VERSION)]
#[command(about = "CLI for versioned static-asset bundling with ordered build pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full declared task sequence
    Build(build::BuildArgs),
    /// Run or list individual pipeline tasks
    Task(task::TaskArgs),
    /// Remove the distribution tree (explicit; never part of a build)
    Clean(clean::CleanArgs),
    /// Inspect the effective bundle manifest
    Manifest(manifest::ManifestArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    output::print_json_result(json_result).ok();

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
