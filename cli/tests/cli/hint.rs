use crate::utils;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: Default settings.
/// Action: Run `interval-hints hint` for one future and one past datetime.
/// Expectation: Each hint is broken down to the default minimum interval of an hour.
#[test]
fn hint_future_and_past() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint", "--now", "@1700000000", "@1700008100", "@1699992800"])
        .assert()
        .success()
        .stdout(concat!("@1700008100: ⏳ 2h\n", "@1699992800: ⌛ 2h\n"));
}

/// Precondition: Default settings.
/// Action: Run `interval-hints hint` for a datetime closer than the minimum interval.
/// Expectation: The hint is hidden.
#[test]
fn hint_below_minimum_is_hidden() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint", "--now", "@1700000000", "@1700000060"])
        .assert()
        .success()
        .stdout("@1700000060: hidden\n");
}

/// Precondition: Default settings.
/// Action: Run `interval-hints hint` with a datetime that can not be parsed.
/// Expectation: The placeholder is printed and the command still succeeds.
#[test]
fn hint_invalid_datetime() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint", "--now", "@0", "someday", "@7200"])
        .assert()
        .success()
        .stdout(concat!(
            "someday: (interval-hint: Invalid datetime)\n",
            "@7200: ⏳ 2h\n",
        ));
}

/// Precondition: Settings select days, hours and minutes down to minutes.
/// Action: Run `interval-hints hint` for datetimes with offsets.
/// Expectation: The breakdown uses the selected units in canonical order, the
/// same instant written with another offset is hidden.
#[test]
fn hint_with_settings_file() {
    let settings = utils::settings(
        "hint_with_settings_file",
        r#"{"minimum-interval": "minutes", "interval-choices": ["minutes", "days", "hours"]}"#,
    )
    .unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args([
            "hint",
            "--now",
            "2024-03-20T00:00:00Z",
            "2024-03-21T02:30:00Z",
            "2024-03-20T09:00:00+09:00",
        ])
        .assert()
        .success()
        .stdout(concat!(
            "2024-03-21T02:30:00Z: ⏳ 1d 2h 30m\n",
            "2024-03-20T09:00:00+09:00: hidden\n",
        ));
}

/// Precondition: Past hints are disabled and renderer hints are always shown.
/// Action: Run `interval-hints hint` with and without `--renderer`.
/// Expectation: Only the renderer hint is visible, down to the second.
#[test]
fn hint_renderer_always_shown() {
    let settings = utils::settings(
        "hint_renderer_always_shown",
        r#"{"show-past": false, "always-show-renderer": true}"#,
    )
    .unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["hint", "--renderer", "--now", "@1000", "@970"])
        .assert()
        .success()
        .stdout("@970: ⌛ 30s\n");

    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["hint", "--now", "@1000", "@970"])
        .assert()
        .success()
        .stdout("@970: hidden\n");
}

/// Precondition: Default settings.
/// Action: Run `interval-hints hint --format jsonl`.
/// Expectation: Each input is a JSON object with the hint state or an error.
#[test]
fn hint_format_jsonl() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    let assert = cmd
        .args(["hint", "--format", "jsonl", "--now", "@0", "@9000", "nope"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines = stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["input"], "@9000");
    assert_eq!(lines[0]["timestamp"], 9000);
    assert_eq!(lines[0]["kind"], "timestamp");
    assert_eq!(lines[0]["is_future"], true);
    assert_eq!(lines[0]["is_hidden"], false);
    assert_eq!(lines[0]["is_short"], false);
    assert_eq!(
        lines[0]["breakdown"],
        serde_json::json!([{"count": 2, "unit": "hours", "label": "h"}])
    );
    assert_eq!(lines[1]["input"], "nope");
    assert_eq!(lines[1]["error"], "unrecognized datetime `nope`");
}

/// Precondition: Default settings.
/// Action: Run `interval-hints hint --format table`.
/// Expectation: A table with a header row and one row per input is printed.
#[test]
fn hint_format_table() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint", "--format", "table", "--now", "@0", "@9000", "@-3600"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Direction")
                .and(predicate::str::contains("future"))
                .and(predicate::str::contains("⌛ 1h")),
        );
}

/// Precondition: Default settings.
/// Action: Run `interval-hints hint --format html --renderer`.
/// Expectation: The hint markup is printed.
#[test]
fn hint_format_html() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint", "--format", "html", "--renderer", "--now", "@0", "@9000"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                r#"<span class="lsp-interval-hints lsp-interval-hints-renderer lsp-interval-hints-future" data-timestamp="9000""#,
            )
            .and(predicate::str::contains(
                r#"<span class="lsp-interval-hints-label"></span><span class="lsp-interval-hints-h">2</span></span>"#,
            )),
        );
}

/// Precondition: None.
/// Action: Run `interval-hints hint` with an unparseable `--now`.
/// Expectation: Command fails with the parse error.
#[test]
fn hint_invalid_now_fails() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint", "--now", "later", "@0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized datetime `later`"));
}

/// Precondition: None.
/// Action: Run `interval-hints hint` without datetimes.
/// Expectation: Command fails.
#[test]
fn hint_requires_datetimes() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["hint"]).assert().failure();
}
