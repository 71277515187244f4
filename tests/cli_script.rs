use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

fn cli_with_config(config_json: &str) -> (Command, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, config_json).unwrap();

    let mut cmd = Command::cargo_bin("budget_bee_cli").unwrap();
    cmd.env("BUDGET_BEE_CLI_SCRIPT", "1")
        .env("BUDGET_BEE_CONFIG", &path)
        .env("NO_COLOR", "1");
    (cmd, dir)
}

#[test]
fn script_mode_prints_score_summary() {
    let (mut cmd, _dir) = cli_with_config(
        r#"{"load_sample_feed": false,
            "taxonomy": [{"name": "Food", "items": ["Groceries", "Eating out"]}]}"#,
    );
    cmd.write_stdin("bee\n50\n\nnot a number\n200\n")
        .assert()
        .success()
        .stdout(contains("Food: $50.00"))
        .stdout(contains("Your Budget Bee score: 85 (on track)"))
        .stdout(contains("User bee logged out."));
}

#[test]
fn script_mode_fails_on_truncated_input() {
    let (mut cmd, _dir) = cli_with_config(r#"{"load_sample_feed": false}"#);
    cmd.write_stdin("bee\n10\n")
        .assert()
        .failure()
        .stderr(contains("Input ended before"));
}
