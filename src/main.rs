mod cli;
mod config;
mod engine;
mod error;
mod ingest;
mod report;
mod scoring;
mod types;

use crate::engine::Strategy;
use crate::error::{Result, RosterError};
use crate::ingest::volunteers::UnresolvedReference;
use crate::types::config::{FormatName, RosterConfig, StrategyName};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct Session {
    engine: engine::AssignmentEngine,
    config: RosterConfig,
    unresolved: Vec<UnresolvedReference>,
}

impl Session {
    /// Exit code for a command that otherwise succeeded.
    fn exit_code(&self) -> i32 {
        if self.unresolved.is_empty() {
            return exit_code::SUCCESS;
        }
        for reference in &self.unresolved {
            eprintln!(
                "warning: line {}: volunteer '{}' references unknown task {}",
                reference.line, reference.volunteer, reference.task_id
            );
        }
        exit_code::WARNINGS
    }
}

fn open_session(data: &cli::DataArgs) -> Result<Session> {
    if !data.path.is_dir() {
        return Err(RosterError::PathNotFound(data.path.display().to_string()));
    }

    let config = config::load_config(&data.path)?.unwrap_or_default();
    let tasks = data
        .tasks
        .clone()
        .unwrap_or_else(|| data.path.join(config.tasks_file()));
    let volunteers = data
        .volunteers
        .clone()
        .unwrap_or_else(|| data.path.join(config.volunteers_file()));

    let loaded = ingest::load(&ingest::Sources {
        tasks: &tasks,
        volunteers: &volunteers,
        strict_references: data.strict || config.strict_references(),
    })?;

    Ok(Session {
        engine: loaded.engine,
        config,
        unresolved: loaded.unresolved,
    })
}

fn resolve_strategy(arg: Option<cli::StrategyArg>, config: &RosterConfig) -> Strategy {
    match arg {
        Some(cli::StrategyArg::Naive) => Strategy::Naive,
        Some(cli::StrategyArg::Balanced) => Strategy::Balanced,
        None => match config.strategy() {
            Some(StrategyName::Naive) => Strategy::Naive,
            Some(StrategyName::Balanced) | None => Strategy::Balanced,
        },
    }
}

fn resolve_format(arg: Option<cli::ReportFormat>, config: &RosterConfig) -> report::OutputFormat {
    match arg {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.format() {
            Some(FormatName::Json) => report::OutputFormat::Json,
            Some(FormatName::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Interest(cmd) => {
            let session = open_session(&cmd.data)?;
            let engine = &session.engine;
            for task in engine.tasks().values() {
                let names = engine
                    .interested_volunteers(task)
                    .into_iter()
                    .map(|volunteer| volunteer.name())
                    .collect::<Vec<_>>();
                println!("{} ({}): {}", task, names.len(), names.join(", "));
            }
            Ok(session.exit_code())
        }
        cli::Commands::Rank(cmd) => {
            let session = open_session(&cmd.data)?;
            let engine = &session.engine;
            let ordered = engine.tasks_by_desirability();
            if ordered.is_empty() {
                println!("rank: no tasks");
                return Ok(session.exit_code());
            }

            println!("tasks by desirability:");
            for (position, task) in ordered.iter().enumerate() {
                let desirability =
                    scoring::task_aggregate_desirability(task, engine.volunteers());
                println!(
                    "{}. {} [{}] desirability {:.3}",
                    position + 1,
                    task,
                    if task.people_facing() {
                        "people-facing"
                    } else {
                        "back-office"
                    },
                    desirability
                );
            }
            if let (Some(first), Some(last)) = (ordered.first(), ordered.last()) {
                println!("most popular task: {first}");
                println!("least popular task: {last}");
            }
            Ok(session.exit_code())
        }
        cli::Commands::Assign(cmd) => {
            let mut session = open_session(&cmd.data)?;
            let strategy = resolve_strategy(cmd.strategy, &session.config);
            let format = resolve_format(cmd.format, &session.config);

            session.engine.run(strategy)?;
            let assignment_report = report::build_assignment_report(&session.engine, strategy);
            println!("{}", report::render_assignment(&assignment_report, format)?);
            Ok(session.exit_code())
        }
        cli::Commands::Compare(cmd) => {
            let mut session = open_session(&cmd.data)?;
            let format = resolve_format(cmd.format, &session.config);

            session.engine.assign_naive()?;
            let naive = report::build_assignment_report(&session.engine, Strategy::Naive);
            session.engine.assign_balanced()?;
            let balanced = report::build_assignment_report(&session.engine, Strategy::Balanced);

            let comparison = types::report::ComparisonReport::new(naive, balanced);
            println!("{}", report::render_comparison(&comparison, format)?);
            Ok(session.exit_code())
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
