use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: None.
/// Action: Run `interval-hints complete bash`.
/// Expectation: Command exits successfully with exit code 0.
#[test]
fn complete_bash_exits_successfully() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["complete", "bash"]).assert().success();
}

/// Precondition: None.
/// Action: Run `interval-hints complete zsh`.
/// Expectation: Command exits successfully and completes the subcommands.
#[test]
fn complete_zsh_exits_successfully() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["complete", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"));
}

/// Precondition: None.
/// Action: Run `interval-hints complete fish`.
/// Expectation: Command exits successfully with exit code 0.
#[test]
fn complete_fish_exits_successfully() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["complete", "fish"]).assert().success();
}

/// Precondition: None.
/// Action: Run `interval-hints complete` with an unknown shell.
/// Expectation: Command fails.
#[test]
fn complete_unknown_shell_fails() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    cmd.args(["complete", "cmd.exe"]).assert().failure();
}
