use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fq() -> Command {
    let mut cmd = Command::cargo_bin("fq").unwrap();
    cmd.env_remove("FQ_MAX_DEPTH")
        .env_remove("FQ_DECODE_DASHES")
        .env_remove("FQ_PRETTY");
    cmd
}

#[test]
fn test_filter_prints_json_tree() {
    fq().args(["--compact", "filter", "price-ge-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"Compare":{"property":"price","op":"Ge","value":{"Int":10}}}"#,
        ));
}

#[test]
fn test_filter_text_output() {
    fq().args(["--text", "filter", "not-a-isNull-and-b-like-'x--y'"])
        .assert()
        .success()
        .stdout("not a isNull and b like 'x-y'\n");
}

#[test]
fn test_canonical_flag_skips_dash_decoding() {
    fq().args(["--canonical", "--text", "filter", "title like 'a-b'"])
        .assert()
        .success()
        .stdout("title like 'a-b'\n");
}

#[test]
fn test_filter_error_exits_nonzero() {
    fq().args(["filter", "a-foo-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Syntax error at position 2"));
}

#[test]
fn test_max_depth_flag() {
    fq().args(["--max-depth", "1", "filter", "((a-isNull))"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested groups or negations"));
}

#[test]
fn test_order_command() {
    fq().args(["--text", "order", "Dprice-Aname"])
        .assert()
        .success()
        .stdout("Dprice-Aname\n");

    fq().args(["--text", "order", "Aname-"])
        .assert()
        .success()
        .stdout("Aname\n");

    fq().args(["order", "Xprice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("should start with D or A"));
}

#[test]
fn test_tokens_command() {
    fq().args(["--compact", "tokens", "a-eq-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"Identifier""#))
        .stdout(predicate::str::contains(r#""kind":"DecimalLiteral""#));
}

#[test]
fn test_escape_and_unescape_commands() {
    fq().args(["escape", "title like 'a-b'"])
        .assert()
        .success()
        .stdout("title-like-'a--b'\n");

    fq().args(["unescape", "title-like-'a--b'"])
        .assert()
        .success()
        .stdout("title like 'a-b'\n");
}

#[test]
fn test_config_file_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.toml");
    fs::write(&path, "[parser]\ndecode_dashes = false\n\n[output]\ntext = true\n").unwrap();

    fq().current_dir(temp_dir.path())
        .arg("--config")
        .arg(&path)
        .args(["filter", "a ne 2"])
        .assert()
        .success()
        .stdout("a ne 2\n");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fq().current_dir(temp_dir.path())
        .args(["--config", "missing.toml", "filter", "a-isNull"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_version_shows_build_info() {
    fq().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fq "))
        .stdout(predicate::str::contains("Commit:"));
}
