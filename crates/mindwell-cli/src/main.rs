use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mindwell-cli", version, about = "Mindwell CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and score assessments
    Assess {
        #[command(subcommand)]
        action: commands::assess::AssessAction,
    },
    /// Locally stored results
    Results {
        #[command(subcommand)]
        action: commands::results::ResultsAction,
    },
    /// Cloud synchronization
    Sync {
        #[command(subcommand)]
        action: commands::sync::SyncAction,
    },
    /// Streaks and badges
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Food photo analysis
    Nutrition {
        #[command(subcommand)]
        action: commands::nutrition::NutritionAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Assess { action } => commands::assess::run(action),
        Commands::Results { action } => commands::results::run(action),
        Commands::Sync { action } => commands::sync::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Nutrition { action } => commands::nutrition::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
