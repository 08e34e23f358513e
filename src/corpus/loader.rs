use crate::error::{GamerWordsError, GwResult};
use crate::table::{most_frequent, CountTable};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads a headerless `word,count` file. Duplicate words are summed.
pub fn read_counts<P: AsRef<Path>>(path: P) -> GwResult<CountTable> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut counts = CountTable::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = idx + 1;
        let rec = result?;

        let parse_err = |reason: String| GamerWordsError::Parse {
            path: path.to_path_buf(),
            row,
            reason,
        };

        if rec.len() != 2 {
            return Err(parse_err(format!("expected 2 columns, found {}", rec.len())));
        }
        let word = &rec[0];
        if word.is_empty() {
            return Err(parse_err("empty word".to_string()));
        }
        let count: u64 = rec[1]
            .trim()
            .parse()
            .map_err(|_| parse_err(format!("count '{}' is not a non-negative integer", &rec[1])))?;

        *counts.entry(word.to_string()).or_default() += count;
    }

    debug!("Loaded {} words from {:?}", counts.len(), path);
    Ok(counts)
}

/// Writes a headerless `word,count` file, most frequent first.
///
/// Words that would need CSV quoting are rejected so every file reads back unchanged.
pub fn write_counts<P: AsRef<Path>>(path: P, counts: &CountTable) -> GwResult<()> {
    if let Some(bad) = counts.keys().find(|w| !is_storable(w)) {
        return Err(GamerWordsError::Validation(format!(
            "word {:?} cannot be stored as a plain CSV field",
            bad
        )));
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;
    for (word, count) in most_frequent(counts, counts.len()) {
        wtr.write_record([word.as_str(), count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Loads every `*.csv` in `dir`, keyed by file stem (the user id).
pub fn load_user_dir<P: AsRef<Path>>(dir: P) -> GwResult<HashMap<String, CountTable>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(GamerWordsError::Validation(format!(
            "User directory not found: {:?}",
            dir
        )));
    }

    let mut users = HashMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(user) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let counts = read_counts(&path)?;
        users.insert(user.to_string(), counts);
    }

    info!("📂 Loaded {} user tables from {:?}", users.len(), dir);
    Ok(users)
}

fn is_storable(word: &str) -> bool {
    !word.is_empty()
        && word == word.trim()
        && !word.contains([',', '"', '\n', '\r'])
}
