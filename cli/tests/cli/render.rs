use crate::utils;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: Default settings.
/// Action: Run `interval-hints render :interval-hint <DATETIME> --key`.
/// Expectation: The UI key of the slot is printed before the renderer template.
#[test]
fn render_macro_with_key() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args([
        "render",
        ":interval-hint",
        "@1700008100",
        "--now",
        "@1700000000",
        "--slot",
        "slot-1",
        "--key",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::starts_with(concat!(
            "lsp-interval-hints-slot-1\n",
            r#"<span class="lsp-interval-hints lsp-interval-hints-renderer lsp-interval-hints-future" data-timestamp="1700008100""#,
        ))
        .and(predicate::str::ends_with(
            r#"<span class="lsp-interval-hints-h">2</span></span>"#.to_owned() + "\n",
        )),
    );
}

/// Precondition: Default settings.
/// Action: Run `interval-hints render` with the macro type without the leading colon.
/// Expectation: The macro is still handled.
#[test]
fn render_macro_plain_type() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["render", "interval-hint", "@7200", "--now", "@0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lsp-interval-hints-renderer"));
}

/// Precondition: Default settings.
/// Action: Run `interval-hints render` with a datetime that can not be parsed.
/// Expectation: The invalid datetime placeholder is printed.
#[test]
fn render_macro_invalid_datetime() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["render", ":interval-hint", "whenever", "--now", "@0"])
        .assert()
        .success()
        .stdout("(interval-hint: Invalid datetime)\n");
}

/// Precondition: Default settings.
/// Action: Run `interval-hints render` for another macro type.
/// Expectation: Nothing is printed.
#[test]
fn render_other_macro() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["render", ":query", "(todo now)"])
        .assert()
        .success()
        .stdout("");
}

/// Precondition: Default settings.
/// Action: Run `interval-hints render` for a datetime closer than the minimum interval.
/// Expectation: A hidden container without children is printed.
#[test]
fn render_macro_hidden() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["render", ":interval-hint", "@60", "--now", "@0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                r#"lsp-interval-hints-renderer lsp-interval-hints-future hidden lsp-interval-hints-short""#,
            )
            .and(predicate::str::contains("lsp-interval-hints-label").not()),
        );
}

/// Precondition: Renderer hints are always shown.
/// Action: Run `interval-hints render` for a datetime closer than the minimum interval.
/// Expectation: The hint is shown down to the second.
#[test]
fn render_macro_always_shown() {
    let settings = utils::settings(
        "render_macro_always_shown",
        r#"{"always-show-renderer": true}"#,
    )
    .unwrap();
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.arg("--settings")
        .arg(&settings)
        .args(["render", ":interval-hint", "@30", "--now", "@0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            r#"<span class="lsp-interval-hints-label"></span>"#,
            r#"<span class="lsp-interval-hints-s">30</span></span>"#,
        )));
}
