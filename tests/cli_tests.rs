mod common;

use common::{write_fixture, Fixture};
use regex::Regex;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    fixture: Fixture,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let fixture = write_fixture(dir.path());
        Self { dir, fixture }
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gamerwords"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_cli_tokenize() {
    let ctx = TestContext::new();
    let input = ctx.dir.path().join("chat.txt");
    let output = ctx.dir.path().join("chat.csv");
    fs::write(&input, "GG ez! gg wp.\nPoggers, gg").unwrap();

    let out = run(&[
        "tokenize",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let re = Regex::new(r"Wrote (\d+) distinct words \((\d+) tokens\)").unwrap();
    let caps = re.captures(&stdout).expect("Summary line missing");
    assert_eq!(&caps[1], "4");
    assert_eq!(&caps[2], "6");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().next(), Some("gg,3"));
}

#[test]
fn test_cli_build() {
    let ctx = TestContext::new();
    let out = run(&[
        "build",
        "--general",
        ctx.fixture.general.to_str().unwrap(),
        "--target",
        ctx.fixture.target.to_str().unwrap(),
        "--min-count",
        "5",
    ]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("COHORT PROFILE"));
    assert!(stdout.contains("poggers"));
}

#[test]
fn test_cli_analyze_json() {
    let ctx = TestContext::new();
    let json_path = ctx.dir.path().join("report.json");
    let out = run(&[
        "analyze",
        "--general",
        ctx.fixture.general.to_str().unwrap(),
        "--target",
        ctx.fixture.target.to_str().unwrap(),
        "--users",
        ctx.fixture.users.to_str().unwrap(),
        "--min-count",
        "5",
        "--json",
        json_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let cards = report["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["user"], "gamer1");
    assert_eq!(cards[0]["classification"], "target");
    assert_eq!(cards[1]["classification"], "general");
}

#[test]
fn test_cli_thresholds_file_with_override() {
    let ctx = TestContext::new();
    let thresholds = ctx.dir.path().join("thresholds.json");
    // min_count 1000 would empty both cohorts; the flag must win.
    fs::write(&thresholds, r#"{ "curation": { "min_count": 1000 } }"#).unwrap();
    let json_path = ctx.dir.path().join("report.json");

    let out = run(&[
        "--thresholds",
        thresholds.to_str().unwrap(),
        "analyze",
        "--general",
        ctx.fixture.general.to_str().unwrap(),
        "--target",
        ctx.fixture.target.to_str().unwrap(),
        "--users",
        ctx.fixture.users.to_str().unwrap(),
        "--min-count",
        "5",
        "--json",
        json_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(report["profile"]["distinctive"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_malformed_table_fails() {
    let ctx = TestContext::new();
    fs::write(&ctx.fixture.general, "the,many\n").unwrap();

    let out = run(&[
        "build",
        "--general",
        ctx.fixture.general.to_str().unwrap(),
        "--target",
        ctx.fixture.target.to_str().unwrap(),
    ]);
    assert_eq!(out.status.code(), Some(1));
}
