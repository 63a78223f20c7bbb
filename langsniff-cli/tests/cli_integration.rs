//! Integration tests for the langsniff CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn langsniff() -> Command {
    Command::cargo_bin("langsniff").unwrap()
}

#[test]
fn test_detect_english_file() {
    langsniff()
        .arg("detect")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-n")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("english-sample.txt\teng\t1.0000\tEnglish"));
}

#[test]
fn test_detect_text_with_allow_list() {
    langsniff()
        .args(["detect", "-t", "Hello World", "-a", "en", "-a", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<text>\teng\t1.0000\tEnglish\n<text>\tfra\t0.0000\tFrench\n",
        ));
}

#[test]
fn test_detect_stdin() {
    langsniff()
        .args(["detect", "-n", "1"])
        .write_stdin("Я люблю читать книги вечером")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>\trus"));
}

#[test]
fn test_json_output() {
    let output = langsniff()
        .args(["detect", "-t", "Le chat est sur la table et il dort", "-f", "json", "-n", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["source"], "<text>");
    assert_eq!(value[0]["results"][0]["alpha3"], "fra");
    assert_eq!(value[0]["results"][0]["alpha2"], "fr");
    assert_eq!(value[0]["results"][0]["language"], "French");
    assert_eq!(value[0]["results"].as_array().unwrap().len(), 2);
}

#[test]
fn test_markdown_output() {
    langsniff()
        .args(["detect", "-t", "ภาษาไทยเป็นภาษาที่สวยงาม", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| tha | Thai | 1.0000 |"))
        .stdout(predicate::str::contains("*Total inputs: 1*"));
}

#[test]
fn test_all_reports_script_ids() {
    langsniff()
        .args(["detect", "-t", "Hello World", "-a", "xyz", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::diff("<text>\tLatin\t1.0000\t-\n"));
}

#[test]
fn test_glob_pattern() {
    langsniff()
        .arg("detect")
        .arg("-q")
        .arg("-n")
        .arg("1")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("english-sample.txt\teng"))
        .stdout(predicate::str::contains("french-sample.txt\tfra"))
        .stdout(predicate::str::contains("russian-sample.txt\trus"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    langsniff()
        .arg("detect")
        .arg("-i")
        .arg(fixture_path("french-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("\tfra\t1.0000\tFrench"));
}

#[test]
fn test_invalid_file() {
    langsniff()
        .args(["detect", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_format() {
    langsniff()
        .args(["detect", "-t", "Hello World", "-f", "yaml"])
        .assert()
        .failure();
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("langsniff.toml");
    fs::write(&config, "allow_list = [\"de\", \"nl\"]\nlimit = 1\n").unwrap();

    langsniff()
        .args(["detect", "-t", "Ik heb een grote hond en een kat", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::diff("<text>\tnld\t1.0000\tDutch\n"));
}

#[test]
fn test_script_command() {
    langsniff()
        .args(["script", "Привет, мир"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Cyrillic\t0.8182\n"));
}

#[test]
fn test_help_command() {
    langsniff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_list_languages() {
    langsniff()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en\teng\tEnglish"))
        .stdout(predicate::str::contains("ja\tjpn\tJapanese"));
}

#[test]
fn test_list_scripts() {
    langsniff()
        .args(["list", "scripts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hebrew\theb, yid"))
        .stdout(predicate::str::contains("kor\t(script only)"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("generated.toml");

    langsniff()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    langsniff()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("invalid.toml");
    fs::write(&config, "min_length = 0\n").unwrap();

    langsniff()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"))
        .stderr(predicate::str::contains("min_length must be greater than 0"));
}
