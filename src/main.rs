use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use gamerwords::config::Config;
use gamerwords::error::GwResult;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with thresholds; explicit flags still win.
    #[arg(global = true, long)]
    thresholds: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count words in raw message text and store them as a CSV table
    Tokenize(cmd::tokenize::TokenizeArgs),
    /// Build and show the cohort profile (distinctive words, ignore set)
    Build(cmd::build::BuildArgs),
    /// Score and classify every user table in a directory
    Analyze(cmd::analyze::AnalyzeArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> GwResult<()> {
    match cli.command {
        Commands::Tokenize(args) => cmd::tokenize::run(args),
        Commands::Build(args) => {
            let config = resolve_config(&cli.thresholds, &args.config, matches, "build")?;
            cmd::build::run(args, config)
        }
        Commands::Analyze(args) => {
            let config = resolve_config(&cli.thresholds, &args.config, matches, "analyze")?;
            cmd::analyze::run(args, config)
        }
    }
}

/// Thresholds file (if any) as the base, explicit command-line values on top.
fn resolve_config(
    path: &Option<String>,
    cli_config: &Config,
    matches: &clap::ArgMatches,
    subcommand: &str,
) -> GwResult<Config> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("⚖️  Loading thresholds from: {}", path);
    let mut config = Config::load_from_file(path)?;
    match matches.subcommand_matches(subcommand) {
        Some(sub_matches) => config.merge_from_cli(cli_config, sub_matches),
        None => warn!("No arguments found for '{}'; using file values only", subcommand),
    }
    Ok(config)
}
