use crate::table::CountTable;
use tracing::debug;

pub const DEFAULT_MAX_WORD_LEN: usize = 20;

/// Drops counts below `threshold`, tokens longer than 20 characters and
/// self-repeating typos such as "wordcword".
pub fn remove_too_uncommon(counts: &CountTable, threshold: u64) -> CountTable {
    curate(counts, threshold, DEFAULT_MAX_WORD_LEN)
}

/// Same as [`remove_too_uncommon`] with a configurable length cap.
pub fn curate(counts: &CountTable, threshold: u64, max_word_len: usize) -> CountTable {
    let curated: CountTable = counts
        .iter()
        .filter(|(word, &count)| {
            count >= threshold
                && word.chars().count() <= max_word_len
                && !is_self_repeating_typo(word)
        })
        .map(|(word, &count)| (word.clone(), count))
        .collect();

    debug!(
        "Curation kept {} of {} words (threshold {}, max len {})",
        curated.len(),
        counts.len(),
        threshold,
        max_word_len
    );

    curated
}

/// Odd-length key containing a `c` whose left half reappears after the middle character.
pub fn is_self_repeating_typo(word: &str) -> bool {
    if !word.contains('c') {
        return false;
    }
    let chars: Vec<char> = word.chars().collect();
    if chars.len() % 2 == 0 {
        return false;
    }

    let mid = (chars.len() - 1) / 2;
    let left: String = chars[..mid].iter().collect();
    let right: String = chars[mid + 1..].iter().collect();
    right.contains(&left)
}
