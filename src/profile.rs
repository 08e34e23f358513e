use crate::scorer::UserScore;
use crate::stats::{CohortSummary, Population};
use crate::table::{most_frequent, CountTable};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Everything the visualization side needs to draw one user's card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub user: String,
    pub classification: Population,
    pub z_target: f64,
    pub z_general: f64,
    pub distinctive_ratio: f64,
    pub top_words: Vec<String>,
}

impl ProfileCard {
    pub fn is_target_member(&self) -> bool {
        self.classification == Population::Target
    }
}

/// A user's `n` most used distinctive words, by raw count.
pub fn top_distinctive_words(
    counts: &CountTable,
    distinctive: &HashSet<String>,
    n: usize,
) -> Vec<String> {
    let used: CountTable = counts
        .iter()
        .filter(|(word, _)| distinctive.contains(*word))
        .map(|(word, &c)| (word.clone(), c))
        .collect();

    most_frequent(&used, n)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

/// One card per scored user, ordered by user id.
pub fn build_cards(
    summary: &CohortSummary,
    scores: &HashMap<String, UserScore>,
    distinctive: &HashSet<String>,
    users: &HashMap<String, CountTable>,
    top_n: usize,
) -> Vec<ProfileCard> {
    let mut cards: Vec<ProfileCard> = scores
        .iter()
        .map(|(user, score)| {
            let z = summary.z_scores.get(user).copied().unwrap_or_default();
            let top_words = users
                .get(user)
                .map(|counts| top_distinctive_words(counts, distinctive, top_n))
                .unwrap_or_default();

            ProfileCard {
                user: user.clone(),
                classification: z.classify(),
                z_target: z.target,
                z_general: z.general,
                distinctive_ratio: score.distinctive_ratio,
                top_words,
            }
        })
        .collect();

    cards.sort_by(|a, b| a.user.cmp(&b.user));
    cards
}
