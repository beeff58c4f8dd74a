//! CLI frontend for the Weltenwanderer narrative quality gate.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::validate::ValidateArgs;

#[derive(Parser)]
#[command(
    name = "ww",
    about = "Weltenwanderer — quality gate for generated narrative",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a generated response (exit status 2 if rejected)
    Validate(ValidateArgs),

    /// List validation profiles and their settings
    Profiles {
        /// JSON file with profile overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Count the words in a response
    Count {
        /// File to read (default: stdin)
        file: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ww=warn,ww_gate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::run(&args),
        Commands::Profiles { config } => commands::profiles::run(config.as_deref()).map(|()| true),
        Commands::Count { file } => commands::count::run(file.as_deref()).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
