use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Volunteer task assignment by interest and workload"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the volunteers interested in each task
    Interest(InterestCommand),
    /// Show tasks in desirability order
    Rank(RankCommand),
    /// Assign tasks with one strategy and report satisfaction
    Assign(AssignCommand),
    /// Run both strategies and compare satisfaction
    Compare(CompareCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    Naive,
    Balanced,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Data directory plus optional overrides for the two CSV inputs.
#[derive(Args)]
pub struct DataArgs {
    /// Directory holding tasks.csv, volunteers.csv and an optional roster.toml
    pub path: PathBuf,
    /// Task CSV, overriding roster.toml
    #[arg(long)]
    pub tasks: Option<PathBuf>,
    /// Volunteer CSV, overriding roster.toml
    #[arg(long)]
    pub volunteers: Option<PathBuf>,
    /// Fail on interests that reference unknown task ids
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct InterestCommand {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct RankCommand {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct AssignCommand {
    #[command(flatten)]
    pub data: DataArgs,
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CompareCommand {
    #[command(flatten)]
    pub data: DataArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
