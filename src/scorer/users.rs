use super::similarity::distance;
use super::types::UserScore;
use crate::cohort::CohortProfile;
use crate::curator::{curate, DEFAULT_MAX_WORD_LEN};
use crate::table::{to_ratio, CountTable, RatioTable};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Scores users against a fixed pair of reference distributions.
///
/// Everything borrowed here is read-only, so users are scored in parallel.
pub struct UserScorer<'a> {
    pub general: &'a RatioTable,
    pub target: &'a RatioTable,
    pub distinctive: &'a HashSet<String>,
    pub ignored: &'a HashSet<String>,
    pub min_count: u64,
    pub max_word_len: usize,
}

impl<'a> UserScorer<'a> {
    pub fn new(
        general: &'a RatioTable,
        target: &'a RatioTable,
        distinctive: &'a HashSet<String>,
        ignored: &'a HashSet<String>,
    ) -> Self {
        Self {
            general,
            target,
            distinctive,
            ignored,
            min_count: 1,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    pub fn from_profile(profile: &'a CohortProfile) -> Self {
        Self::new(
            &profile.general,
            &profile.target,
            &profile.distinctive,
            &profile.ignored,
        )
    }

    pub fn with_curation(mut self, min_count: u64, max_word_len: usize) -> Self {
        self.min_count = min_count;
        self.max_word_len = max_word_len;
        self
    }

    /// The user's curated, ignore-filtered ratio table.
    pub fn user_ratios(&self, counts: &CountTable) -> RatioTable {
        let filtered: CountTable = curate(counts, self.min_count, self.max_word_len)
            .into_iter()
            .filter(|(word, _)| !self.ignored.contains(word))
            .collect();
        to_ratio(&filtered).0
    }

    pub fn score(&self, counts: &CountTable) -> UserScore {
        let ratios = self.user_ratios(counts);

        let total: f64 = ratios.values().sum();
        let distinctive_ratio = if total > 0.0 {
            let used: f64 = ratios
                .iter()
                .filter(|(word, _)| self.distinctive.contains(*word))
                .map(|(_, &v)| v)
                .sum();
            used / total
        } else {
            0.0
        };

        UserScore {
            general_closeness: distance(self.general, &ratios),
            target_closeness: distance(self.target, &ratios),
            distinctive_ratio,
        }
    }

    pub fn score_all(&self, users: &HashMap<String, CountTable>) -> HashMap<String, UserScore> {
        let scores: HashMap<String, UserScore> = users
            .par_iter()
            .map(|(id, counts)| (id.clone(), self.score(counts)))
            .collect();

        info!("🧮 Scored {} users", scores.len());
        scores
    }
}

/// Scores every user table against the two reference distributions.
pub fn score_all(
    general: &RatioTable,
    target: &RatioTable,
    distinctive: &HashSet<String>,
    ignored: &HashSet<String>,
    users: &HashMap<String, CountTable>,
) -> HashMap<String, UserScore> {
    UserScorer::new(general, target, distinctive, ignored).score_all(users)
}
