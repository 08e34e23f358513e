use std::cmp::Ordering;
use std::collections::HashMap;

/// Word -> raw occurrence count.
pub type CountTable = HashMap<String, u64>;

/// Word -> share of all occurrences. Sums to 1.0 unless empty.
pub type RatioTable = HashMap<String, f64>;

/// Converts counts into ratios and reports the total token count.
///
/// A zero total yields the canonical empty ratio table instead of dividing by zero.
pub fn to_ratio(counts: &CountTable) -> (RatioTable, u64) {
    let total: u64 = counts.values().sum();
    if total == 0 {
        return (RatioTable::new(), total);
    }

    let total_f = total as f64;
    let ratios = counts
        .iter()
        .map(|(word, &count)| (word.clone(), count as f64 / total_f))
        .collect();

    (ratios, total)
}

/// Rescales a ratio table so its values sum to 1 again.
///
/// Tables whose remaining mass is zero collapse to the empty table.
pub fn renormalize(ratios: &RatioTable) -> RatioTable {
    let total: f64 = ratios.values().sum();
    if total <= 0.0 {
        return RatioTable::new();
    }
    ratios
        .iter()
        .map(|(word, &value)| (word.clone(), value / total))
        .collect()
}

/// The `n` highest-valued entries, descending. Ties are broken alphabetically.
pub fn most_frequent<V>(table: &HashMap<String, V>, n: usize) -> Vec<(String, V)>
where
    V: Copy + PartialOrd,
{
    let mut entries: Vec<(String, V)> = table.iter().map(|(w, &v)| (w.clone(), v)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries.truncate(n);
    entries
}

/// Sum of all values in a ratio table.
pub fn ratio_sum(ratios: &RatioTable) -> f64 {
    ratios.values().sum()
}
