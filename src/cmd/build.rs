use crate::reports;
use clap::Args;
use gamerwords::api::load_profile;
use gamerwords::config::Config;
use gamerwords::error::GwResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: Config,

    /// Count table of the general population
    #[arg(short, long)]
    pub general: PathBuf,

    /// Count table of the target population
    #[arg(short, long)]
    pub target: PathBuf,
}

pub fn run(args: BuildArgs, config: Config) -> GwResult<()> {
    let profile = load_profile(&args.general, &args.target, &config)?;
    reports::print_cohort_profile(&profile, config.report.top_distinctive);
    Ok(())
}
