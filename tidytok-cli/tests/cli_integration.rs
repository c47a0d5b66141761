//! Integration tests for the tidytok CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn tidytok() -> Command {
    Command::cargo_bin("tidytok").unwrap()
}

#[test]
fn test_cross_row_bigrams_within_stanza() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.csv"))
        .args(["--token", "ngrams", "-n", "2", "--collapse", "stanza"])
        .args(["-f", "jsonl"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"line":1,"stanza":1,"word":"death he"}"#,
        ))
        .stdout(predicate::str::contains(r#""word":"ourselves and""#))
        .stdout(predicate::str::contains(r#""word":"me the""#).not())
        .stdout(predicate::str::contains(r#""word":"immortality we""#).not());
}

#[test]
fn test_rows_stay_apart_without_collapse() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.csv"))
        .args(["--token", "ngrams", "-f", "jsonl"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""word":"stop for""#))
        .stdout(predicate::str::contains("death he").not());
}

#[test]
fn test_group_by_respects_adjacency() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("austen.json"))
        .args(["--token", "ngrams", "--group-by", "book"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("book\tchapter\tword\n"))
        .stdout(predicate::str::contains("Emma\t1\trich with\n"))
        .stdout(predicate::str::contains("Persuasion\t1\tsir walter\n"))
        .stdout(predicate::str::contains("hall seemed").not())
        .stdout(predicate::str::contains("disposition seemed").not());
}

#[test]
fn test_conflicting_collapse_and_group_by() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.csv"))
        .args(["--collapse", "stanza", "--group-by", "line"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "collapse and group_by cannot both be specified",
    ));
}

#[test]
fn test_unknown_text_column() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.jsonl"))
        .args(["--text-column", "body"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown column: body"));
}

#[test]
fn test_invalid_ngram_size() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.csv"))
        .args(["--token", "ngrams", "-n", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("n must be at least 1"));
}

#[test]
fn test_glob_processes_each_file_as_its_own_table() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.*"))
        .args(["--token", "ngrams", "--collapse", "stanza", "-f", "jsonl"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches(r#""word":"death he""#).count(), 2);
    // the last csv row never meets the first jsonl row
    assert!(!stdout.contains("haste because"));
}

#[test]
fn test_tsv_rejects_files_with_different_columns() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.csv"), "book,text\nEmma,Emma Woodhouse\n").unwrap();
    fs::write(temp_dir.path().join("b.csv"), "chapter,text\n3,Sir Walter\n").unwrap();

    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(temp_dir.path().join("*.csv").to_string_lossy().to_string());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("b.csv"))
        .stderr(predicate::str::contains("do not match the TSV header"));
}

#[test]
fn test_jsonl_accepts_files_with_different_columns() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.csv"), "book,text\nEmma,Emma Woodhouse\n").unwrap();
    fs::write(temp_dir.path().join("b.csv"), "chapter,text\n3,Sir Walter\n").unwrap();

    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(temp_dir.path().join("*.csv").to_string_lossy().to_string())
        .args(["-f", "jsonl"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"book":"Emma","word":"woodhouse"}"#))
        .stdout(predicate::str::contains(r#"{"chapter":3,"word":"walter"}"#));
}

#[test]
fn test_tsv_header_without_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blank.csv");
    fs::write(&path, "book,text\nEmma,\n").unwrap();

    let mut cmd = tidytok();
    cmd.arg("tokenize").arg("-i").arg(&path);

    cmd.assert().success().stdout("book\tword\n");
}

#[test]
fn test_json_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("tokens.json");

    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.jsonl"))
        .args(["--keep-case", "--keep-text", "--output-column", "token"])
        .args(["-f", "json", "-o"])
        .arg(&output_path);
    cmd.assert().success();

    let content = fs::read_to_string(&output_path).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(rows[0]["token"], "Because");
    assert_eq!(rows[0]["text"], "Because I could not stop for Death -");
    assert_eq!(rows[0]["line"], 1);
    assert_eq!(rows.len(), 7 + 5 + 6 + 2);
}

#[test]
fn test_sentences_across_collapsed_rows() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.csv"))
        .args(["--token", "sentences", "--collapse", "stanza", "-f", "jsonl"]);

    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"line":3,"stanza":2,"word":"the carriage held but just ourselves and immortality."}"#,
    ));
}

#[test]
fn test_unsupported_input_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("poem.txt");
    fs::write(&path, "Because I could not stop for Death").unwrap();

    let mut cmd = tidytok();
    cmd.arg("tokenize").arg("-i").arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input format"));
}

#[test]
fn test_no_matching_files() {
    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("*.parquet"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found matching"));
}

#[test]
fn test_generate_validate_and_use_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tidytok.toml");

    tidytok()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    tidytok()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    let content = fs::read_to_string(&config_path)
        .unwrap()
        .replace("token = \"words\"", "token = \"ngrams\"")
        .replace("# collapse = [\"book\", \"chapter\"]", "collapse = [\"stanza\"]")
        .replace("format = \"tsv\"", "format = \"jsonl\"");
    fs::write(&config_path, content).unwrap();

    let mut cmd = tidytok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("dickinson.csv"))
        .arg("-c")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""word":"death he""#));
}

#[test]
fn test_validate_rejects_conflicting_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(
        &config_path,
        "[tokenize]\ncollapse = [\"chapter\"]\ngroup_by = [\"book\"]\n",
    )
    .unwrap();

    tidytok()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
