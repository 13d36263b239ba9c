// Drives the compiled binary. Every run points --config at a temp file so
// the user's saved defaults never leak in.

use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn sylla(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("sylla").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_requested_amount() {
    let dir = tempdir().unwrap();
    let output = sylla(&dir.path().join("config.json"))
        .args(["-a", "7", "-l", "nl"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 7);
}

#[test]
fn seeded_runs_repeat() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let args = ["--seed", "99", "-a", "12", "-c", "3", "-n", "-S"];

    let first = sylla(&config).args(args).output().unwrap();
    let second = sylla(&config).args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn inverted_syllable_range_fails() {
    let dir = tempdir().unwrap();
    let output = sylla(&dir.path().join("config.json"))
        .args(["--min-syllables", "3", "--max-syllables", "1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("min syllables (3) cannot be greater than max syllables (1)"));
}

#[test]
fn unknown_language_fails() {
    let dir = tempdir().unwrap();
    let output = sylla(&dir.path().join("config.json"))
        .args(["-l", "fr"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown language code 'fr'"));
}

#[test]
fn out_of_bounds_saved_defaults_fail() {
    for saved in [r#"{"amount":0}"#, r#"{"max_syllables":40}"#] {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.json");
        fs::write(&config, saved).unwrap();

        let output = sylla(&config).output().unwrap();

        assert!(!output.status.success(), "{saved} was accepted");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("must be between 1 and"), "{stderr}");
    }
}

#[test]
fn unwritable_output_path_reports_clean_error() {
    let dir = tempdir().unwrap();
    let output = sylla(&dir.path().join("config.json"))
        .args(["-a", "2", "-o"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(!stderr.contains("Custom {"), "{stderr}");
    assert!(!stderr.contains("kind:"), "{stderr}");
}

#[test]
fn output_file_matches_stdout() {
    let dir = tempdir().unwrap();
    let names_path = dir.path().join("names.txt");
    let output = sylla(&dir.path().join("config.json"))
        .args(["-a", "15", "-C", "capitalize", "-o"])
        .arg(&names_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let saved = fs::read_to_string(&names_path).unwrap();
    assert_eq!(saved.split('\n').collect::<Vec<_>>(), stdout_lines(&output));
}

#[test]
fn saved_defaults_apply_to_later_runs() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    let first = sylla(&config)
        .args(["-a", "3", "-C", "UPPERISH", "--save-defaults"])
        .output()
        .unwrap();
    assert!(first.status.success());

    let saved = fs::read_to_string(&config).unwrap();
    assert!(saved.contains("\"amount\": 3"));
    assert!(saved.contains("UPPERISH"));

    let second = sylla(&config).output().unwrap();
    assert!(second.status.success());
    assert_eq!(stdout_lines(&second).len(), 3);
}

#[test]
fn lists_languages() {
    let dir = tempdir().unwrap();
    let output = sylla(&dir.path().join("config.json"))
        .arg("--list-languages")
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    assert!(lines.contains(&"en  English".to_string()));
    assert!(lines.contains(&"no  Norwegian".to_string()));
}
