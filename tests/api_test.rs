mod common;

use common::{assert_close, write_fixture};
use gamerwords::api::run_analysis;
use gamerwords::config::Config;
use gamerwords::stats::Population;
use std::collections::HashSet;

fn config() -> Config {
    let mut config = Config::default();
    config.curation.min_count = 5;
    config
}

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let fx = write_fixture(dir.path());

    let report = run_analysis(&fx.general, &fx.target, &fx.users, &config()).unwrap();

    assert_eq!(report.profile.ignored, set(&["the", "and"]));
    assert_eq!(report.profile.distinctive, set(&["poggers", "gg"]));
    assert_eq!(report.scores.len(), 3);

    let users: Vec<&str> = report.cards.iter().map(|c| c.user.as_str()).collect();
    assert_eq!(users, vec!["gamer1", "normie1", "normie2"]);

    let gamer = &report.cards[0];
    assert_eq!(gamer.classification, Population::Target);
    assert_eq!(gamer.top_words, vec!["poggers", "gg"]);
    assert_close(gamer.distinctive_ratio, 9.0 / 17.0, 1e-9);
    assert!(gamer.z_target < gamer.z_general);

    for normie in &report.cards[1..] {
        assert_eq!(normie.classification, Population::General);
        assert_eq!(normie.distinctive_ratio, 0.0);
        assert!(normie.top_words.is_empty());
    }
}

#[test]
fn test_report_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let fx = write_fixture(dir.path());
    let report = run_analysis(&fx.general, &fx.target, &fx.users, &config()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["cards"][0]["classification"], "target");
    assert!(json["scores"]["normie1"]["general_closeness"].is_number());
}

#[test]
fn test_invalid_config_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let fx = write_fixture(dir.path());
    let mut config = config();
    config.distinctiveness.band_lower = 2.0;

    assert!(run_analysis(&fx.general, &fx.target, &fx.users, &config).is_err());
}

#[test]
fn test_missing_user_dir() {
    let dir = tempfile::tempdir().unwrap();
    let fx = write_fixture(dir.path());

    let result = run_analysis(&fx.general, &fx.target, dir.path().join("nobody"), &config());
    assert!(result.is_err());
}
