use crate::config::DistinctivenessParams;
use crate::table::RatioTable;
use std::collections::HashSet;

/// Words the target cohort uses disproportionately often, with the default thresholds.
pub fn determine_distinctive(reference: &RatioTable, target: &RatioTable) -> HashSet<String> {
    determine_distinctive_with(reference, target, &DistinctivenessParams::default())
}

pub fn determine_distinctive_with(
    reference: &RatioTable,
    target: &RatioTable,
    params: &DistinctivenessParams,
) -> HashSet<String> {
    distinctive_frequencies_with(reference, target, params)
        .into_keys()
        .collect()
}

/// Distinctive words paired with their target-cohort ratio (word cloud input).
pub fn distinctive_frequencies(reference: &RatioTable, target: &RatioTable) -> RatioTable {
    distinctive_frequencies_with(reference, target, &DistinctivenessParams::default())
}

pub fn distinctive_frequencies_with(
    reference: &RatioTable,
    target: &RatioTable,
    params: &DistinctivenessParams,
) -> RatioTable {
    target
        .iter()
        .filter(|(word, &t)| is_distinctive(reference.get(*word).copied(), t, params))
        .map(|(word, &t)| (word.clone(), t))
        .collect()
}

#[inline]
fn is_distinctive(reference: Option<f64>, target: f64, params: &DistinctivenessParams) -> bool {
    match reference {
        Some(r) => r < target / params.distinctive_multiplier,
        None => target > params.absent_floor,
    }
}
