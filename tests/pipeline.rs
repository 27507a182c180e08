use clap::Parser;
use speedstats::config::cli::Args;
use speedstats::config::{Config, Settings};
use speedstats::error::StatsError;
use speedstats::infrastructure::FileSystemStore;
use speedstats::services::RunService;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const CATEGORIES: &str = include_str!("fixtures/categories.json");
const EXPECTED_RUNS: &str = include_str!("fixtures/expected_runs.csv");

fn service(dir: &Path, categories: &str, test: bool, settings: Settings) -> RunService {
    let categories_file = dir.join("groups.json");
    std::fs::write(&categories_file, categories).unwrap();

    let output_file = dir.join("out").join("runs.csv");
    let summary_file = dir.join("out").join("summary.json");

    let mut argv = vec![
        "speedstats".to_string(),
        "--categories-file".to_string(),
        categories_file.display().to_string(),
        "--output-file".to_string(),
        output_file.display().to_string(),
        "--summary-file".to_string(),
        summary_file.display().to_string(),
    ];
    if test {
        argv.push("--test".to_string());
    }

    let config = Config::with_settings(Args::parse_from(argv), settings);
    config.ensure_directories().unwrap();

    let store = Arc::new(FileSystemStore::new(
        categories_file,
        output_file,
        summary_file,
    ));
    RunService::new(config, store)
}

fn excluding_banned() -> Settings {
    Settings {
        excluded_players: vec!["banned".to_string()],
        ..Settings::default()
    }
}

#[tokio::test]
async fn writes_expected_credit_rows() {
    let dir = TempDir::new().unwrap();
    let summary = service(dir.path(), CATEGORIES, true, excluding_banned())
        .process()
        .await
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("out/runs.csv")).unwrap();
    assert_eq!(written, EXPECTED_RUNS);

    assert_eq!(summary.total_categories, 3);
    assert_eq!(summary.leaderboard_entries, 9);
    assert_eq!(summary.credit_rows, 8);
    assert_eq!(summary.credited_players, 5);
    assert!(dir.path().join("out/summary.json").exists());
}

#[tokio::test]
async fn output_is_byte_identical_across_runs() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for dir in [&first, &second] {
        service(dir.path(), CATEGORIES, true, excluding_banned())
            .process()
            .await
            .unwrap();
    }

    let a = std::fs::read(first.path().join("out/runs.csv")).unwrap();
    let b = std::fs::read(second.path().join("out/runs.csv")).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn players_are_credited_once_per_category() {
    let dir = TempDir::new().unwrap();
    service(dir.path(), CATEGORIES, true, Settings::default())
        .process()
        .await
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("out/runs.csv")).unwrap();
    let mut seen = std::collections::HashSet::new();
    for line in written.lines() {
        let fields: Vec<&str> = line.split("\",\"").collect();
        assert!(seen.insert((fields[0].to_string(), fields[3].to_string())));
    }
    // Without exclusions the non-guest participant of the last co-op run is credited.
    assert!(written.contains("\"banned\""));
    assert!(!written.contains("[Guest]"));
}

#[tokio::test]
async fn too_few_categories_aborts_outside_test_mode() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        minimum_categories: 10,
        ..Settings::default()
    };

    let err = service(dir.path(), CATEGORIES, false, settings)
        .process()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StatsError::NotEnoughCategories {
            found: 3,
            minimum: 10
        }
    ));
    assert!(!dir.path().join("out/runs.csv").exists());
}

#[tokio::test]
async fn empty_category_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = service(dir.path(), r#"{"Any%": []}"#, true, Settings::default())
        .process()
        .await
        .unwrap_err();

    assert!(matches!(err, StatsError::EmptyCategory(name) if name == "Any%"));
}

#[tokio::test]
async fn malformed_input_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let err = service(dir.path(), r#"{"Any%": [{"time": "fast"}]}"#, true, Settings::default())
        .process()
        .await
        .unwrap_err();

    assert!(matches!(err, StatsError::Serialization(_)));
}
