//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use similar_asserts::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_plain_stdin() {
    cargo_bin_cmd!("mdtext")
        .args(["render", "--format", "plain"])
        .write_stdin("# Title\nsee [Wikipedia](https://en.wikipedia.org/wiki/Markdown) now\n")
        .assert()
        .success()
        .stdout("Title\nsee Wikipedia now\n");
}

#[test]
fn test_render_ansi_styles_bold() {
    cargo_bin_cmd!("mdtext")
        .arg("render")
        .write_stdin("**bold** text")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1mbold\x1b[0m"))
        .stdout(predicate::str::contains(" text"));
}

#[test]
fn test_render_json_units() {
    let output = cargo_bin_cmd!("mdtext")
        .args(["render", "--format", "json"])
        .write_stdin("see [docs](https://example.com) now")
        .output()
        .unwrap();
    assert!(output.status.success());

    let units: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let units = units.as_array().unwrap();
    assert_eq!(units.len(), 3);
    assert_eq!(units[0]["kind"], "plain-text");
    assert_eq!(units[1]["kind"], "link");
    assert_eq!(units[1]["text"], "docs");
    assert_eq!(units[1]["url"], "https://example.com");
    assert_eq!(units[1]["style"]["color"], "blue");
    assert_eq!(units[2]["text"], " now");
}

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "run `cargo test` twice").unwrap();

    cargo_bin_cmd!("mdtext")
        .args(["render", "--format", "plain", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("run cargo test twice\n");
}

#[test]
fn test_render_discovers_config_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "**[label](http://x.test)**").unwrap();
    fs::write(
        temp_dir.path().join(".mdtext.toml"),
        "display_text = \"every-rule\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdtext")
        .args(["render", "--format", "plain", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("**label**\n");
}

#[test]
fn test_render_with_custom_rule_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(
        &config_file,
        "[[rule]]\nid = \"strike\"\npattern = '~~(.+?)~~'\ntemplate = \"$1\"\nstyle = [\"italic\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdtext")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("a ~~b~~ c")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[3mb\x1b[0m"));
}

#[test]
fn test_render_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[[rule]]\nid = \"bad\"\npattern = '(oops'\n").unwrap();

    cargo_bin_cmd!("mdtext")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern for rule 'bad'"));
}

#[test]
fn test_render_empty_input() {
    cargo_bin_cmd!("mdtext")
        .args(["render", "--format", "json"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("[]\n");
}
