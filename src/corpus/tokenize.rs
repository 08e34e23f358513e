use crate::table::CountTable;

/// Lowercases, strips ASCII punctuation and counts whitespace-separated words.
pub fn tokenize(text: &str) -> CountTable {
    let mut counts = CountTable::new();
    add_text(&mut counts, text);
    counts
}

/// Merges several texts (one per message, channel or post) into one count table.
pub fn count_texts<I, S>(texts: I) -> CountTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = CountTable::new();
    for text in texts {
        add_text(&mut counts, text.as_ref());
    }
    counts
}

fn add_text(counts: &mut CountTable, text: &str) {
    let clean: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    for word in clean.split_whitespace() {
        *counts.entry(word.to_string()).or_default() += 1;
    }
}
