use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn proverbs(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("proverbs").unwrap();
    cmd.env_remove("PORT")
        .env_remove("PROVERBS_BIND")
        .env_remove("PROVERBS_EXAMPLES_DIR")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir.path())
        .arg("--no-color");
    cmd
}

#[test]
fn test_stats_counts_both_sources() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:     29"))
        .stdout(predicate::str::contains("Official:  19"))
        .stdout(predicate::str::contains("Community: 10"));
}

#[test]
fn test_search_finds_zero_value() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .args(["search", "zero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Make the zero value useful."));
}

#[test]
fn test_search_without_matches() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .args(["search", "xyzzy-no-such-proverb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No proverbs found."));
}

#[test]
fn test_show_proverb() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .args(["show", "official-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Don't communicate by sharing memory"))
        .stdout(predicate::str::contains("next: official-002"));
}

#[test]
fn test_show_unknown_proverb_fails() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .args(["show", "official-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Proverb not found: official-999"));
}

#[test]
fn test_list_paginates() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .args(["list", "--source", "community", "--limit", "3", "--offset", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("community-003"))
        .stdout(predicate::str::contains("community-005"))
        .stdout(predicate::str::contains("community-006").not())
        .stdout(predicate::str::contains("Showing 3-5 of 10"));
}

#[test]
fn test_validate_builtin_set() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 29 proverbs are valid."));
}

#[test]
fn test_export_then_load_from_file() {
    let temp = TempDir::new().unwrap();
    let export = temp.path().join("out/proverbs.json");

    proverbs(&temp)
        .arg("export")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 29 proverbs"));
    assert!(export.exists());

    proverbs(&temp)
        .arg("stats")
        .arg("--from")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:     29"));
}

#[test]
fn test_from_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .args(["stats", "--from"])
        .arg(temp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load proverbs"));
}

#[test]
fn test_random_with_seed_is_repeatable() {
    let temp = TempDir::new().unwrap();
    let first = proverbs(&temp)
        .args(["random", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = proverbs(&temp)
        .args(["random", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_config_reads_file_and_env() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), r#"{"port": 9000}"#).unwrap();

    proverbs(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 9000"));

    proverbs(&temp)
        .env("PORT", "9100")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 9100"));
}

#[test]
fn test_config_save_writes_file() {
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("config.json");

    proverbs(&temp)
        .arg("config")
        .assert()
        .success();
    assert!(!config_file.exists());

    proverbs(&temp)
        .env("PORT", "9200")
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved configuration"));
    let saved = std::fs::read_to_string(&config_file).unwrap();
    assert!(saved.contains("\"port\": 9200"));

    proverbs(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\": 9200"));
}

#[test]
fn test_examples_reports_files() {
    let temp = TempDir::new().unwrap();
    proverbs(&temp)
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:     3"));
}
