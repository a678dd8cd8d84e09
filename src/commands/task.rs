use clap::{Args, Subcommand};
use serde::Serialize;

use bundleboy::pipeline;
use bundleboy::task::TaskReport;

use crate::commands::{CmdResult, TargetArgs};

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Run a single declared task by name (partial rebuild)
    Run {
        /// Task name as declared in the manifest
        name: String,

        #[command(flatten)]
        target: TargetArgs,
    },
    /// List declared tasks with their sequence positions
    List {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Run(TaskRunOutput),
    List(TaskListOutput),
}

#[derive(Serialize)]
pub struct TaskRunOutput {
    pub command: String,
    pub manifest: String,
    #[serde(flatten)]
    pub report: TaskReport,
}

#[derive(Serialize)]
pub struct TaskListOutput {
    pub command: String,
    pub manifest: String,
    pub tasks: Vec<TaskListItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListItem {
    pub name: String,
    /// Zero-based position in the build sequence; absent for declared
    /// tasks the sequence does not reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_position: Option<usize>,
    pub src: Vec<String>,
    pub dest: String,
}

pub fn run(args: TaskArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<TaskOutput> {
    match args.command {
        TaskCommand::Run { name, target } => {
            let (manifest, source, ctx) = target.resolve()?;
            let report = pipeline::run_task(&manifest, &ctx, &name)?;

            Ok((
                TaskOutput::Run(TaskRunOutput {
                    command: "task.run".to_string(),
                    manifest: source.describe(),
                    report,
                }),
                0,
            ))
        }
        TaskCommand::List { target } => {
            let (manifest, source, _ctx) = target.resolve()?;

            let tasks = manifest
                .tasks
                .iter()
                .map(|spec| TaskListItem {
                    name: spec.name.clone(),
                    sequence_position: manifest.sequence.iter().position(|n| n == &spec.name),
                    src: spec.src.clone(),
                    dest: spec.dest.clone(),
                })
                .collect();

            Ok((
                TaskOutput::List(TaskListOutput {
                    command: "task.list".to_string(),
                    manifest: source.describe(),
                    tasks,
                }),
                0,
            ))
        }
    }
}
