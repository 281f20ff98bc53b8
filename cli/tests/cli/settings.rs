use crate::utils;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: The settings file does not exist.
/// Action: Run `interval-hints --settings <FILE> hint`.
/// Expectation: Command fails naming the settings file.
#[test]
fn missing_settings_file_fails() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["--settings", "missing_settings_file_fails.json", "hint", "@0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to read settings file `missing_settings_file_fails.json`",
        ));
}

/// Precondition: The settings file is not JSON.
/// Action: Run `interval-hints --settings <FILE> hint`.
/// Expectation: Command fails.
#[test]
fn malformed_settings_file_fails() {
    let settings = utils::settings("malformed_settings_file_fails", "show-future = true").unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["hint", "@0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid settings file"));
}

/// Precondition: The settings hold values of the wrong type.
/// Action: Run `interval-hints hint`.
/// Expectation: The values fall back to their defaults with a warning.
#[test]
fn malformed_values_are_coerced() {
    let settings = utils::settings(
        "malformed_values_are_coerced",
        r#"{"show-future": "yes", "minimum-interval": "fortnights", "interval-choices": "all"}"#,
    )
    .unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["hint", "--now", "@0", "@9000", "@-9000"])
        .assert()
        .success()
        .stdout(concat!("@9000: ⏳ 2h\n", "@-9000: ⌛ 2h\n"))
        .stderr(predicate::str::contains("warning: unknown unit `fortnights`"));
}

/// Precondition: Months and minutes are both selected.
/// Action: Run `interval-hints hint`.
/// Expectation: A warning about the ambiguous label is reported.
#[test]
fn ambiguous_labels_warn() {
    let settings = utils::settings(
        "ambiguous_labels_warn",
        r#"{"interval-choices": ["months", "minutes"]}"#,
    )
    .unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["hint", "--now", "@0", "@9000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: "));
}

/// Precondition: Months and minutes are both selected.
/// Action: Run `interval-hints --log-level off hint`.
/// Expectation: Nothing is written to stderr.
#[test]
fn log_level_off_silences_warnings() {
    let settings = utils::settings(
        "log_level_off_silences_warnings",
        r#"{"interval-choices": ["months", "minutes"]}"#,
    )
    .unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["--log-level", "off", "hint", "--now", "@0", "@9000"])
        .assert()
        .success()
        .stderr("");
}
