use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

fn railboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_railboard"));
    cmd.env_remove("RAILBOARD_LOG");
    cmd
}

fn run_console(script: &str) -> std::process::Output {
    let mut child = railboard_cmd()
        .args(["--no-color", "console"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_list_shows_all_seed_trains() {
    let output = railboard_cmd()
        .args(["--no-color", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for number in ["EXP-101", "RAP-205", "LOC-403", "INT-701", "EXP-309"] {
        assert!(stdout.contains(number), "missing {}", number);
    }
    assert!(stdout.contains("(+25m)"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let output = railboard_cmd()
        .args(["list", "--search", "boston", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let trains = parsed.as_array().unwrap();
    assert_eq!(trains.len(), 1);
    assert_eq!(trains[0]["number"], "EXP-101");
    assert_eq!(trains[0]["status"], "On Time");
    assert_eq!(trains[0]["occupied"], 342);
}

#[test]
fn test_list_no_match_shows_empty_state() {
    let output = railboard_cmd()
        .args(["--no-color", "list", "--search", "ZZZZZ"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No trains found"));
}

#[test]
fn test_list_delayed_filter() {
    let output = railboard_cmd()
        .args(["list", "--filter", "delayed", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let numbers: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["RAP-205"]);
}

#[test]
fn test_invalid_filter_fails() {
    let output = railboard_cmd()
        .args(["list", "--filter", "boarding"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid filter"));
}

#[test]
fn test_stats_json() {
    let output = railboard_cmd().args(["stats", "--json"]).output().unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["total"], 5);
    assert_eq!(parsed["on_time"], 2);
    assert_eq!(parsed["delayed"], 1);
    assert_eq!(parsed["total_capacity"], 2000);
}

#[test]
fn test_stats_ignore_filter_in_config() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "filter: delayed").unwrap();

    let output = railboard_cmd()
        .args(["--no-color", "--config"])
        .arg(config.path())
        .arg("stats")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Trains: 5"));
}

#[test]
fn test_show_renders_dashboard() {
    let output = railboard_cmd()
        .args(["--no-color", "show", "--tab", "live", "--filter", "ontime"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Train Management"));
    assert!(stdout.contains("[Live]"));
    assert!(stdout.contains("[On Time]"));
    assert!(stdout.contains("Total Trains: 5"));
    assert!(stdout.contains("INT-701"));
    assert!(!stdout.contains("LOC-403"));
}

#[test]
fn test_config_file_sets_bar_width() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "bar_width: 4\ncolor: never").unwrap();

    let output = railboard_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["list", "--search", "coast"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[----]"));
}

#[test]
fn test_bad_config_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "bar_width: wide").unwrap();

    let output = railboard_cmd()
        .arg("--config")
        .arg(config.path())
        .arg("stats")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config error"));
}

#[test]
fn test_console_add_train_workflow() {
    let script = "\
add
set number NEW-7
set name Harbor Link
set from Boston
set to Providence
set capacity 120
submit
search boston
stats
quit
";
    let output = run_console(script);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Added train NEW-7"));
    assert!(stdout.contains("Total Trains: 6"));
    assert!(stdout.contains("Total Capacity: 2120"));

    let last_search = stdout.rfind("Search: \"boston\"").unwrap();
    let after = &stdout[last_search..];
    let first = after.find("EXP-101").unwrap();
    let added = after.find("NEW-7").unwrap();
    assert!(first < added);
}

#[test]
fn test_console_incomplete_add_is_ignored() {
    let script = "add\nset number NEW-7\nset name Harbor Link\nsubmit\nstats\n";
    let output = run_console(script);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Added train"));
    assert!(stdout.contains("Total Trains: 5"));
}

#[test]
fn test_console_reports_bad_commands_and_continues() {
    let output = run_console("filter sometimes\nfilter delayed\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: Invalid filter"));
    assert!(stdout.contains("Filter:  All   [Delayed]"));
}
