use assert_cmd::Command;
use jiff::{ToSpan, Zoned};
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn actionnote_cmd() -> Command {
    let mut cmd = Command::cargo_bin("actionnote").expect("Failed to find actionnote binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_generate_from_text() {
    actionnote_cmd()
        .args(["generate", "--text", "Agenda: feature A kickoff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Meeting Summary"))
        .stdout(predicate::str::contains("### Decisions"))
        .stdout(predicate::str::contains("### Action Table"))
        .stdout(predicate::str::contains("Wireframe production"))
        .stdout(predicate::str::contains("### Email Preview"));
}

#[test]
fn test_cli_generate_due_dates_follow_deadline() {
    let today = Zoned::now().date();
    let primary = today.saturating_add(10.days()).to_string();
    let secondary = today.saturating_add(7.days()).to_string();

    actionnote_cmd()
        .args(["generate", "--text", "notes", "--deadline-days", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(primary))
        .stdout(predicate::str::contains(secondary));
}

#[test]
fn test_cli_generate_blank_stdin() {
    actionnote_cmd()
        .arg("generate")
        .write_stdin("   \n\t\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no input provided)"))
        .stdout(predicate::str::contains("_No action items._"))
        .stdout(predicate::str::contains("Wireframe production").not());
}

#[test]
fn test_cli_generate_reads_stdin() {
    actionnote_cmd()
        .arg("generate")
        .write_stdin("Decisions: share the draft next week\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Competitor research"));
}

#[test]
fn test_cli_generate_json() {
    let output = actionnote_cmd()
        .args(["generate", "--text", "notes", "--json"])
        .output()
        .expect("Failed to run actionnote");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert!(value["summary"].as_str().unwrap().contains("Meeting Summary"));
    assert!(value["decisions"].is_string());
    assert!(value["email_draft"].is_string());

    let actions = value["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[0]["task"], "Wireframe production");
    assert_eq!(actions[0]["owner"], "Designer Kim");
    assert_eq!(actions[0]["priority"], "high");
}

#[test]
fn test_cli_generate_korean_locale() {
    actionnote_cmd()
        .args(["--locale", "ko", "generate", "--text", "회의 메모"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 회의 요약"))
        .stdout(predicate::str::contains("와이어프레임 제작"))
        .stdout(predicate::str::contains("### 메일 미리보기"));
}

#[test]
fn test_cli_generate_sample() {
    actionnote_cmd()
        .args(["generate", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Technical review prep"));
}

#[test]
fn test_cli_generate_from_file() {
    let temp_dir = create_cli_test_environment();
    let notes = temp_dir.path().join("notes.txt");
    std::fs::write(&notes, b"Agenda: weekly sync\xff\xfe").unwrap();

    actionnote_cmd()
        .args(["generate", "--file", notes.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wireframe production"));
}

#[test]
fn test_cli_generate_missing_file() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.txt");

    actionnote_cmd()
        .args(["generate", "--file", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_cli_generate_rejects_deadline_out_of_range() {
    for days in ["0", "22", "-3"] {
        actionnote_cmd()
            .args(["generate", "--text", "notes", "--deadline-days", days])
            .assert()
            .failure()
            .stderr(predicate::str::contains("deadline_days"));
    }
}

#[test]
fn test_cli_generate_rejects_unknown_duration() {
    actionnote_cmd()
        .args(["generate", "--text", "notes", "--duration", "45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration_minutes"));
}

#[test]
fn test_cli_generate_conflicting_sources() {
    actionnote_cmd()
        .args(["generate", "--text", "notes", "--sample"])
        .assert()
        .failure();
}

#[test]
fn test_cli_event_to_stdout() {
    actionnote_cmd()
        .args([
            "event",
            "--date",
            "2024-01-01",
            "--slot",
            "10:00-11:00",
            "--title",
            "Design review",
            "--stdout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCALENDAR\r\n"))
        .stdout(predicate::str::contains("DTSTART:20240101T100000\r\n"))
        .stdout(predicate::str::contains("DTEND:20240101T110000\r\n"))
        .stdout(predicate::str::contains("SUMMARY:Design review\r\n"))
        .stdout(predicate::str::ends_with("END:VCALENDAR\r\n"));
}

#[test]
fn test_cli_event_writes_file() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("nested").join("follow-up.ics");

    actionnote_cmd()
        .args([
            "event",
            "--date",
            "2024-03-15",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Calendar event created"))
        .stdout(predicate::str::contains("Start: 2024-03-15 09:00"))
        .stdout(predicate::str::contains("End: 2024-03-15 09:30"));

    let ics = std::fs::read_to_string(&path).unwrap();
    assert!(ics.contains("PRODID:-//ActionNote//SaaS Prototype//EN\r\n"));
    assert!(ics.contains("DTSTART:20240315T090000\r\n"));
    assert!(ics.contains("DTEND:20240315T093000\r\n"));
    assert!(ics.contains("SUMMARY:ActionNote Action\r\n"));
    assert!(ics.contains("DESCRIPTION:Automatically generated action schedule\r\n"));
}

#[test]
fn test_cli_event_default_file_name() {
    let temp_dir = create_cli_test_environment();

    actionnote_cmd()
        .current_dir(temp_dir.path())
        .args(["event", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("actionnote_action.ics"));

    assert!(temp_dir.path().join("actionnote_action.ics").exists());
}

#[test]
fn test_cli_event_korean_default_title() {
    actionnote_cmd()
        .args(["--locale", "ko", "event", "--date", "2024-01-01", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY:액션 수행 시간\r\n"))
        .stdout(predicate::str::contains("DESCRIPTION:자동 생성된 액션 일정\r\n"));
}

#[test]
fn test_cli_event_rejects_invalid_slot() {
    actionnote_cmd()
        .args(["event", "--date", "2024-01-01", "--slot", "25:00-26:00", "--stdout"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("time_range"));
}

#[test]
fn test_cli_event_rejects_invalid_date() {
    actionnote_cmd()
        .args(["event", "--date", "2024-02-30", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn test_cli_event_inverted_range() {
    actionnote_cmd()
        .args(["event", "--date", "2024-01-01", "--slot", "11:00-10:00", "--stdout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not after start"));

    actionnote_cmd()
        .args([
            "event",
            "--date",
            "2024-01-01",
            "--slot",
            "11:00-10:00",
            "--allow-inverted",
            "--stdout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DTSTART:20240101T110000\r\n"))
        .stdout(predicate::str::contains("DTEND:20240101T100000\r\n"));
}

#[test]
fn test_cli_event_failure_writes_no_file() {
    let temp_dir = create_cli_test_environment();
    let path = temp_dir.path().join("bad.ics");

    actionnote_cmd()
        .args([
            "event",
            "--slot",
            "9:00-9:30",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure();

    assert!(!path.exists());
}

#[test]
fn test_cli_slots() {
    actionnote_cmd()
        .arg("slots")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Recommended Slots"))
        .stdout(predicate::str::contains("- 09:00-09:30"))
        .stdout(predicate::str::contains("- 10:00-11:00"))
        .stdout(predicate::str::contains("- 14:00-15:00"));
}

#[test]
fn test_cli_help() {
    actionnote_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("event"))
        .stdout(predicate::str::contains("serve"));
}
