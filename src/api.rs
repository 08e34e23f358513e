use crate::cohort::{self, CohortProfile};
use crate::config::Config;
use crate::corpus::{load_user_dir, read_counts};
use crate::error::GwResult;
use crate::profile::{build_cards, ProfileCard};
use crate::scorer::{UserScore, UserScorer};
use crate::stats::{self, CohortSummary};
use crate::table::CountTable;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Full result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub profile: CohortProfile,
    pub scores: HashMap<String, UserScore>,
    pub summary: CohortSummary,
    pub cards: Vec<ProfileCard>,
}

/// Service: build the cohort profile from two count files.
pub fn load_profile<P1: AsRef<Path>, P2: AsRef<Path>>(
    general_path: P1,
    target_path: P2,
    config: &Config,
) -> GwResult<CohortProfile> {
    config.validate()?;
    let general = read_counts(general_path)?;
    let target = read_counts(target_path)?;
    Ok(cohort::build_from_config(&general, &target, config))
}

/// Service: score, summarize and card every user against an existing profile.
pub fn analyze_users(
    profile: CohortProfile,
    users: &HashMap<String, CountTable>,
    config: &Config,
) -> AnalysisReport {
    let scores = UserScorer::from_profile(&profile)
        .with_curation(config.curation.user_min_count, config.curation.max_word_len)
        .score_all(users);
    let summary = stats::summarize(&scores);
    let cards = build_cards(
        &summary,
        &scores,
        &profile.distinctive,
        users,
        config.report.top_words,
    );

    let members = cards.iter().filter(|c| c.is_target_member()).count();
    info!(
        "Classified {} of {} users as target-cohort members",
        members,
        cards.len()
    );

    AnalysisReport {
        profile,
        scores,
        summary,
        cards,
    }
}

/// Service: the whole pipeline from files on disk.
pub fn run_analysis<P1, P2, P3>(
    general_path: P1,
    target_path: P2,
    users_dir: P3,
    config: &Config,
) -> GwResult<AnalysisReport>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
    P3: AsRef<Path>,
{
    let profile = load_profile(general_path, target_path, config)?;
    let users = load_user_dir(users_dir)?;
    Ok(analyze_users(profile, &users, config))
}
