use super::filter::remove_most_common_with;
use super::selector::determine_distinctive_with;
use crate::config::{Config, DistinctivenessParams};
use crate::curator::{curate, DEFAULT_MAX_WORD_LEN};
use crate::table::{most_frequent, to_ratio, CountTable, RatioTable};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

/// Reference distributions for one analysis run. Immutable once built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CohortProfile {
    pub general: RatioTable,
    pub target: RatioTable,
    pub distinctive: HashSet<String>,
    pub ignored: HashSet<String>,
    /// Token totals after curation, before filtering.
    pub general_tokens: u64,
    pub target_tokens: u64,
}

impl CohortProfile {
    /// Distinctive words ranked by their share of the target cohort.
    pub fn ranked_distinctive(&self, n: usize) -> Vec<(String, f64)> {
        let ranked: RatioTable = self
            .distinctive
            .iter()
            .filter_map(|w| self.target.get(w).map(|&r| (w.clone(), r)))
            .collect();
        most_frequent(&ranked, n)
    }
}

/// Curate -> normalize -> ignore-band filter -> distinctive selection, with default thresholds.
pub fn build(general: &CountTable, target: &CountTable, threshold: u64) -> CohortProfile {
    build_with(
        general,
        target,
        threshold,
        DEFAULT_MAX_WORD_LEN,
        &DistinctivenessParams::default(),
    )
}

pub fn build_from_config(general: &CountTable, target: &CountTable, config: &Config) -> CohortProfile {
    build_with(
        general,
        target,
        config.curation.min_count,
        config.curation.max_word_len,
        &config.distinctiveness,
    )
}

pub fn build_with(
    general: &CountTable,
    target: &CountTable,
    threshold: u64,
    max_word_len: usize,
    params: &DistinctivenessParams,
) -> CohortProfile {
    // Thresholds are count-space, so curation must come before normalization.
    let general_curated = curate(general, threshold, max_word_len);
    let target_curated = curate(target, threshold, max_word_len);

    let (general_ratio, general_tokens) = to_ratio(&general_curated);
    let (target_ratio, target_tokens) = to_ratio(&target_curated);

    if general_tokens == 0 {
        warn!("General cohort has no words left after curation");
    }
    if target_tokens == 0 {
        warn!("Target cohort has no words left after curation");
    }

    let (general_ratio, target_ratio, ignored) =
        remove_most_common_with(&general_ratio, &target_ratio, params);
    let distinctive = determine_distinctive_with(&general_ratio, &target_ratio, params);

    info!(
        "📚 Cohort profile: {} general words, {} target words, {} ignored, {} distinctive",
        general_ratio.len(),
        target_ratio.len(),
        ignored.len(),
        distinctive.len()
    );

    CohortProfile {
        general: general_ratio,
        target: target_ratio,
        distinctive,
        ignored,
        general_tokens,
        target_tokens,
    }
}
