#![allow(dead_code)]

use gamerwords::table::{CountTable, RatioTable};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn counts(entries: &[(&str, u64)]) -> CountTable {
    entries.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

pub fn ratios(entries: &[(&str, f64)]) -> RatioTable {
    entries.iter().map(|(w, r)| (w.to_string(), *r)).collect()
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}

pub fn assert_tables_close(actual: &RatioTable, expected: &RatioTable) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "table sizes differ: {actual:?} vs {expected:?}"
    );
    for (word, &value) in expected {
        let got = actual
            .get(word)
            .unwrap_or_else(|| panic!("missing word {word:?} in {actual:?}"));
        assert_close(*got, value, 1e-9);
    }
}

fn write_table(path: &Path, entries: &[(&str, u64)]) {
    let mut f = File::create(path).unwrap();
    for (word, count) in entries {
        writeln!(f, "{},{}", word, count).unwrap();
    }
}

/// On-disk cohort: general/target tables plus three users.
pub struct Fixture {
    pub general: PathBuf,
    pub target: PathBuf,
    pub users: PathBuf,
}

pub fn write_fixture(root: &Path) -> Fixture {
    let general = root.join("general.csv");
    let target = root.join("target.csv");
    let users = root.join("users");
    fs::create_dir(&users).unwrap();

    write_table(
        &general,
        &[
            ("the", 400),
            ("and", 200),
            ("weather", 50),
            ("news", 50),
            ("game", 10),
        ],
    );
    write_table(
        &target,
        &[
            ("the", 380),
            ("and", 190),
            ("game", 120),
            ("poggers", 60),
            ("gg", 50),
        ],
    );

    write_table(
        &users.join("gamer1.csv"),
        &[("the", 10), ("game", 8), ("poggers", 5), ("gg", 4)],
    );
    write_table(
        &users.join("normie1.csv"),
        &[("the", 12), ("weather", 6), ("news", 5)],
    );
    write_table(
        &users.join("normie2.csv"),
        &[("and", 3), ("news", 7), ("weather", 7), ("game", 1)],
    );

    Fixture {
        general,
        target,
        users,
    }
}
