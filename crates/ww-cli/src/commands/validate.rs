use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use ww_gate::{Profile, ValidationResult};

#[derive(Args)]
pub struct ValidateArgs {
    /// File to read (default: stdin)
    file: Option<PathBuf>,

    /// Profile: generic, narrative, choice, world
    #[arg(short, long, default_value_t = Profile::Generic)]
    profile: Profile,

    /// JSON file with profile overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the minimum word count
    #[arg(long)]
    min_words: Option<usize>,

    /// Override the maximum word count
    #[arg(long)]
    max_words: Option<usize>,

    /// Skip refusal detection
    #[arg(long)]
    no_refusal: bool,

    /// Skip the completeness check
    #[arg(long)]
    no_completeness: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Returns whether the response passed.
pub fn run(args: &ValidateArgs) -> Result<bool, String> {
    let config = super::load_config(args.config.as_deref())?;
    let mut options = config.options_for(args.profile);
    if let Some(min) = args.min_words {
        options.min_words = min;
    }
    if let Some(max) = args.max_words {
        options.max_words = max;
    }
    if args.no_refusal {
        options.check_refusal = false;
    }
    if args.no_completeness {
        options.check_completeness = false;
    }
    options
        .validate_bounds(args.profile.name())
        .map_err(|e| e.to_string())?;

    let text = super::read_input(args.file.as_deref())?;
    let result = args.profile.validate_with(&text, &options);
    tracing::info!(
        profile = args.profile.name(),
        valid = result.valid,
        errors = result.errors.len(),
        "response validated"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{json}");
    } else {
        print_report(args.profile, &result);
    }

    Ok(result.valid)
}

fn print_report(profile: Profile, result: &ValidationResult) {
    let verdict = if result.valid {
        "valid".green().bold()
    } else {
        "invalid".red().bold()
    };
    println!(
        "  {verdict} {} ({} word{})",
        profile.to_string().dimmed(),
        result.word_count,
        if result.word_count == 1 { "" } else { "s" },
    );

    for error in &result.errors {
        println!("  {} [{}] {}", "error".red(), error.kind, error.message);
    }
    for warning in &result.warnings {
        println!("  {} {warning}", "warning".yellow());
    }
}
