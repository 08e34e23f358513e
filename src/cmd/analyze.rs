use crate::reports;
use clap::Args;
use gamerwords::api::run_analysis;
use gamerwords::config::Config;
use gamerwords::error::GwResult;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub general: PathBuf,

    #[arg(short, long)]
    pub target: PathBuf,

    /// Directory of per-user count tables (`<user>.csv`)
    #[arg(short, long)]
    pub users: PathBuf,

    /// Also write the full report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs, config: Config) -> GwResult<()> {
    let report = run_analysis(&args.general, &args.target, &args.users, &config)?;

    reports::print_cohort_profile(&report.profile, config.report.top_distinctive);
    reports::print_cohort_summary(&report);
    reports::print_user_scores(&report);
    reports::print_profile_cards(&report.cards);

    if let Some(path) = &args.json {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("💾 Report written to {:?}", path);
    }
    Ok(())
}
