use crate::scorer::UserScore;
use serde::Serialize;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Population {
    General,
    Target,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ZScores {
    pub general: f64,
    pub target: f64,
}

impl ZScores {
    pub fn classify(&self) -> Population {
        if is_target_member(self.target, self.general) {
            Population::Target
        } else {
            Population::General
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CohortSummary {
    pub mean_general: f64,
    pub std_general: f64,
    pub mean_target: f64,
    pub std_target: f64,
    pub mean_distinctive_ratio: f64,
    pub z_scores: HashMap<String, ZScores>,
}

/// Population mean and standard deviation of each closeness, plus per-user z-scores.
pub fn summarize(scores: &HashMap<String, UserScore>) -> CohortSummary {
    if scores.is_empty() {
        warn!("No user scores to summarize");
        return CohortSummary::default();
    }

    let general: Vec<f64> = scores.values().map(|s| s.general_closeness).collect();
    let target: Vec<f64> = scores.values().map(|s| s.target_closeness).collect();
    let ratios: Vec<f64> = scores.values().map(|s| s.distinctive_ratio).collect();

    let (mean_general, std_general) = mean_std(&general);
    let (mean_target, std_target) = mean_std(&target);
    let (mean_distinctive_ratio, _) = mean_std(&ratios);

    if is_degenerate(std_general, mean_general) || is_degenerate(std_target, mean_target) {
        warn!("Zero variance in cohort closeness; affected z-scores are 0");
    }

    let z_scores = scores
        .iter()
        .map(|(user, s)| {
            let z = ZScores {
                general: z_score(s.general_closeness, mean_general, std_general),
                target: z_score(s.target_closeness, mean_target, std_target),
            };
            (user.clone(), z)
        })
        .collect();

    CohortSummary {
        mean_general,
        std_general,
        mean_target,
        std_target,
        mean_distinctive_ratio,
        z_scores,
    }
}

/// Arithmetic mean and population (ddof = 0) standard deviation.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Standard score; 0 when the cohort has no spread.
pub fn z_score(value: f64, mean: f64, std: f64) -> f64 {
    if is_degenerate(std, mean) {
        return 0.0;
    }
    (value - mean) / std
}

/// Closeness is a distance, so a lower target z than general z means closer to the target.
/// Equal scores are not members.
pub fn is_target_member(z_target: f64, z_general: f64) -> bool {
    z_target - z_general < 0.0
}

// Rounding noise from identical inputs must not turn into a z-score of +-1.
#[inline]
fn is_degenerate(std: f64, mean: f64) -> bool {
    std <= f64::EPSILON * mean.abs().max(1.0)
}
