//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_parse_shows_rule_stacks() {
    cargo_bin_cmd!("mdtext")
        .arg("parse")
        .write_stdin("**[label](http://x.test)**")
        .assert()
        .success()
        .stdout(predicate::str::contains("[identity > bold] \"**\""))
        .stdout(predicate::str::contains(
            "[identity > bold > link] \"[label](http://x.test)\"",
        ));
}

#[test]
fn test_parse_reports_preprocessed_ranges() {
    cargo_bin_cmd!("mdtext")
        .arg("parse")
        .write_stdin("# Title")
        .assert()
        .success()
        .stdout("0..8 [identity > header1] \" # Title\"\n");
}

#[test]
fn test_parse_plain_text_single_segment() {
    cargo_bin_cmd!("mdtext")
        .arg("parse")
        .write_stdin("just text")
        .assert()
        .success()
        .stdout("0..9 [identity] \"just text\"\n");
}
