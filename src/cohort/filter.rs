use crate::config::DistinctivenessParams;
use crate::table::{renormalize, RatioTable};
use std::collections::HashSet;
use tracing::debug;

/// Removes words whose share is similar in both cohorts (within the default 1.25/0.75 band)
/// and re-normalizes what is left.
///
/// Returns `(general', target', ignore_set)`.
pub fn remove_most_common(
    general: &RatioTable,
    target: &RatioTable,
) -> (RatioTable, RatioTable, HashSet<String>) {
    remove_most_common_with(general, target, &DistinctivenessParams::default())
}

pub fn remove_most_common_with(
    general: &RatioTable,
    target: &RatioTable,
    params: &DistinctivenessParams,
) -> (RatioTable, RatioTable, HashSet<String>) {
    // An empty side means its curated total was zero; nothing is comparable.
    if general.is_empty() {
        return (RatioTable::new(), target.clone(), HashSet::new());
    }
    if target.is_empty() {
        return (general.clone(), target.clone(), HashSet::new());
    }

    let ignored: HashSet<String> = general
        .iter()
        .filter(|(word, &g)| match target.get(*word) {
            Some(&t) => g * params.band_upper > t && t > g * params.band_lower,
            None => false,
        })
        .map(|(word, _)| word.clone())
        .collect();

    let keep = |table: &RatioTable| -> RatioTable {
        table
            .iter()
            .filter(|(word, _)| !ignored.contains(*word))
            .map(|(word, &v)| (word.clone(), v))
            .collect()
    };

    let general_out = renormalize(&keep(general));
    let target_out = renormalize(&keep(target));

    debug!(
        "Ignore band removed {} shared words ({} general / {} target remain)",
        ignored.len(),
        general_out.len(),
        target_out.len()
    );

    (general_out, target_out, ignored)
}
