use crate::utils;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: None.
/// Action: Run `interval-hints bug-report`.
/// Expectation: Command exits successfully with exit code 0.
#[test]
fn bug_report_exits_successfully() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["bug-report"]).assert().success();
}

/// Precondition: A settings file exists.
/// Action: Run `interval-hints --settings <FILE> bug-report`.
/// Expectation: The report includes the settings file content.
#[test]
fn bug_report_includes_settings() {
    let settings = utils::settings("bug_report_includes_settings", r#"{"update-interval": 600}"#).unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .arg("bug-report")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""update-interval": 600"#));
}
