//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CATALOG: &str = "\
scientific_name,accepted_common_names
Quercus robur,zomereik;gewone eik
Fagus sylvatica,beuk
";

/// A `plantquiz` command isolated from the user's config and environment.
fn plantquiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("plantquiz").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("PLANTQUIZ_CATALOG")
        .env_remove("PLANTQUIZ_DATA_DIR");
    cmd
}

fn write_catalog(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("plants.csv");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_valid_catalog() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, CATALOG);

    plantquiz(&dir)
        .arg("validate")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 plants"))
        .stdout(predicate::str::contains("Catalog valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(
        &dir,
        "scientific_name,accepted_common_names\nQuercus robur,eik\nQuercus robur,zomereik\n",
    );

    plantquiz(&dir)
        .arg("validate")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate scientific name"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, "latin,english\nQuercus robur,oak\n");

    plantquiz(&dir)
        .arg("validate")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("accepted_common_names"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .arg("validate")
        .arg("--catalog")
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plantquiz.toml"))
        .stdout(predicate::str::contains("Created data/plants.csv"));

    assert!(dir.path().join("plantquiz.toml").exists());
    assert!(dir.path().join("data/plants.csv").exists());

    // The starter catalog must itself be valid.
    plantquiz(&dir)
        .arg("validate")
        .arg("--catalog")
        .arg("data/plants.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 plants"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir).arg("init").assert().success();

    plantquiz(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn check_accepts_a_typo() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .args(["check", "--input", "Qurcus robur", "--accepted", "Quercus robur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best match: Quercus robur"))
        .stdout(predicate::str::contains("Verdict: match"));
}

#[test]
fn check_rejects_a_different_word() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .args(["check", "--input", "Oak", "--accepted", "Quercus robur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict: no match"));
}

#[test]
fn check_picks_best_of_several() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .args([
            "check",
            "--input",
            "gewone eik",
            "--accepted",
            "zomereik",
            "--accepted",
            "gewone eik",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best match: gewone eik (100.0%)"));
}

#[test]
fn check_empty_input_never_matches() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .args(["check", "--input", "", "--accepted", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match (empty answer)"));
}

#[test]
fn check_threshold_out_of_range() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .args(["check", "--input", "a", "--accepted", "a", "--threshold", "101"])
        .assert()
        .failure();
}

#[test]
fn stats_on_fresh_data_dir() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .arg("stats")
        .arg("--data-dir")
        .arg(dir.path().join("cache"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet"));
}

#[test]
fn stats_reads_existing_history() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("cache");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("progress.json"),
        r#"{
  "sessions": [
    {"date": "2025-01-01", "score": 9, "max_score": 15, "grade": 6.4},
    {"date": "2025-01-02", "score": 15, "max_score": 15, "grade": 10.0}
  ],
  "high_score": 15
}"#,
    )
    .unwrap();

    plantquiz(&dir)
        .arg("stats")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("High score: 15"))
        .stdout(predicate::str::contains("2 session(s) completed"))
        .stdout(predicate::str::contains("Average grade: 8.2"))
        .stdout(predicate::str::contains("2025-01-02"));

    let output = plantquiz(&dir)
        .arg("stats")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["high_score"], 15);
    assert_eq!(json["session_count"], 2);
    assert_eq!(json["sessions"][0]["grade"], 6.4);
}

#[test]
fn corrupt_progress_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("cache");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("progress.json"), "garbage").unwrap();
    std::fs::write(data_dir.join("mistakes.json"), "{").unwrap();

    plantquiz(&dir)
        .arg("stats")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded yet"));

    plantquiz(&dir)
        .arg("mistakes")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No mistakes recorded"));
}

#[test]
fn mistakes_list_and_clear() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("cache");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(
        data_dir.join("mistakes.json"),
        r#"["Quercus robur", "Fagus sylvatica"]"#,
    )
    .unwrap();

    plantquiz(&dir)
        .arg("mistakes")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 plant(s) to practice"))
        .stdout(predicate::str::contains("Quercus robur"));

    plantquiz(&dir)
        .arg("mistakes")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 mistake(s)"));

    plantquiz(&dir)
        .arg("mistakes")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No mistakes recorded"));
}

#[test]
fn config_file_supplies_data_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("plantquiz.toml"), "data_dir = \"progress\"\n").unwrap();
    std::fs::create_dir_all(dir.path().join("progress")).unwrap();
    std::fs::write(
        dir.path().join("progress/mistakes.json"),
        r#"["Tilia cordata"]"#,
    )
    .unwrap();

    plantquiz(&dir)
        .arg("mistakes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilia cordata"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant species recognition quiz"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    plantquiz(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plantquiz"));
}
