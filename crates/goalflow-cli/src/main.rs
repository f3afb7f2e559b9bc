mod cmd;
mod input;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "goalflow",
    about = "Goal tracking toolkit — progress rollups, dashboards, and AI-drafted goals over exported JSON",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, env = "GOALFLOW_CONFIG", default_value = "goalflow.yaml")]
    config: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Progress rollup for every goal in an export
    Progress {
        /// Goals JSON export ('-' for stdin)
        input: String,

        /// Only this goal, by id or title; shows the per-sub-goal breakdown
        #[arg(long)]
        goal: Option<String>,
    },

    /// Dashboard aggregates: completion rate, team performance, distribution,
    /// department rollup, recent activity
    Analytics {
        /// Goals JSON export ('-' for stdin)
        input: String,
    },

    /// Show the display badge for raw status (or priority) values
    Classify {
        /// Raw values, e.g. on_track blocked archived; omit to list every known one
        values: Vec<String>,

        /// Classify as priorities instead of statuses
        #[arg(long)]
        priority: bool,
    },

    /// Draft a goal tree from free-form input
    Suggest {
        /// What you want to achieve
        text: String,

        /// Skip the model call and use the deterministic skeleton
        #[arg(long)]
        offline: bool,

        /// individual or team
        #[arg(long, default_value = "individual")]
        goal_type: String,

        /// Materialize the draft into a full goal record (JSON)
        #[arg(long)]
        adopt: bool,
    },

    /// Generate the weekly check-in summary for one goal
    Summary {
        /// Goals JSON export ('-' for stdin)
        input: String,

        /// Goal to summarize, by id or title
        #[arg(long)]
        goal: String,

        /// Skip the model call and use the fixed fallback texts
        #[arg(long)]
        offline: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = dispatch(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let config = goalflow_core::config::Config::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    match cli.command {
        Commands::Progress { input, goal } => cmd::progress::run(&input, goal.as_deref(), cli.json),
        Commands::Analytics { input } => cmd::analytics::run(&input, &config, cli.json),
        Commands::Classify { values, priority } => cmd::classify::run(&values, priority, cli.json),
        Commands::Suggest {
            text,
            offline,
            goal_type,
            adopt,
        } => cmd::suggest::run(&text, offline, &goal_type, adopt, &config, cli.json),
        Commands::Summary {
            input,
            goal,
            offline,
        } => cmd::summary::run(&input, &goal, offline, &config, cli.json),
    }
}
