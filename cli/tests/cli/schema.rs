use assert_cmd::cargo::cargo_bin_cmd;

/// Precondition: None.
/// Action: Run `interval-hints schema`.
/// Expectation: The settings schema is printed as a JSON array in display order.
#[test]
fn schema_lists_settings() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    let assert = cmd.args(["schema"]).assert().success();
    let schema =
        serde_json::from_slice::<serde_json::Value>(&assert.get_output().stdout).unwrap();
    let keys = schema
        .as_array()
        .unwrap()
        .iter()
        .map(|it| it["key"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        keys,
        [
            "show-future",
            "show-past",
            "minimum-interval",
            "interval-choices",
            "short-interval-threshold",
            "update-on-edit",
            "update-interval",
            "always-show-renderer",
            "no-default-styles",
        ]
    );
    assert_eq!(schema[2]["type"], "enum");
    assert_eq!(schema[2]["enumPicker"], "select");
    assert_eq!(schema[2]["default"], "hours");
    assert_eq!(schema[3]["enumPicker"], "checkbox");
    assert_eq!(schema[3]["default"], serde_json::json!(["hours", "minutes", "seconds"]));
}

/// Precondition: None.
/// Action: Run `interval-hints schema --compact`.
/// Expectation: The schema is printed on a single line.
#[test]
fn schema_compact() {
    let mut cmd = cargo_bin_cmd!("interval-hints");
    let assert = cmd.args(["schema", "--compact"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}
