mod common;

use common::counts;
use gamerwords::curator::{curate, remove_too_uncommon};
use rstest::rstest;

#[rstest]
#[case::threshold_and_length(
    &[("gamers", 1), ("pasta", 24), ("notgamer", 4), ("gamingaminggaming", 2)],
    4,
    &[("pasta", 24), ("notgamer", 4)]
)]
#[case::self_repeating_typos(
    &[("mochacmocha", 101010101), ("gamers", 6), ("aditicaditi", 85), ("lukecaditi", 16), ("pastacpasta", 2)],
    3,
    &[("gamers", 6), ("lukecaditi", 16)]
)]
#[case::overly_long(&[("asfdljkasfdladsfjksfdakhasfdlfsda", 110)], 2, &[])]
#[case::empty(&[], 0, &[])]
#[case::user_threshold_drops_zero(&[("gg", 0), ("ez", 1)], 1, &[("ez", 1)])]
fn test_remove_too_uncommon(
    #[case] input: &[(&str, u64)],
    #[case] threshold: u64,
    #[case] expected: &[(&str, u64)],
) {
    assert_eq!(remove_too_uncommon(&counts(input), threshold), counts(expected));
}

#[test]
fn test_length_limit_is_inclusive() {
    let twenty = "abdefghijklmnopqrstu"; // 20 chars
    let twenty_one = "abdefghijklmnopqrstuv";
    let out = remove_too_uncommon(&counts(&[(twenty, 5), (twenty_one, 5)]), 1);
    assert_eq!(out, counts(&[(twenty, 5)]));
}

#[test]
fn test_length_counts_characters() {
    // 20 chars, 40 bytes
    let word = "éééééééééééééééééééé";
    let out = remove_too_uncommon(&counts(&[(word, 3)]), 1);
    assert_eq!(out.len(), 1);
}

#[test]
fn test_custom_length_cap() {
    let out = curate(&counts(&[("short", 5), ("longerword", 5)]), 1, 6);
    assert_eq!(out, counts(&[("short", 5)]));
}

#[test]
fn test_input_is_not_mutated() {
    let input = counts(&[("gamers", 1), ("pasta", 24)]);
    let snapshot = input.clone();
    let _ = remove_too_uncommon(&input, 4);
    assert_eq!(input, snapshot);
}
