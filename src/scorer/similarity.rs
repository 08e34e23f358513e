use crate::table::RatioTable;

/// Euclidean distance over the user's vocabulary only.
///
/// Reference words the user never typed contribute nothing; user words missing
/// from the reference count in full.
pub fn distance(reference: &RatioTable, user: &RatioTable) -> f64 {
    user.iter()
        .map(|(word, &u)| match reference.get(word) {
            Some(&r) => (u - r).powi(2),
            None => u.powi(2),
        })
        .sum::<f64>()
        .sqrt()
}
