mod common;

use common::BoardTest;
use serde_json::Value;

fn json_field(rows: &Value, field: &str) -> Vec<String> {
    rows.as_array()
        .expect("output should be a JSON array")
        .iter()
        .map(|row| row[field].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// ls
// ============================================================================

#[test]
fn test_ls_lists_all_tickets() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["ls"]);

    assert!(output.contains("Login crash"));
    assert!(output.contains("Typo on landing page"));
    assert!(output.contains("Slow search"));
    assert!(output.contains("Assigned Dev"));
    assert!(output.contains("Details"));
    assert!(output.contains("3 of 3 ticket(s)"));
}

#[test]
fn test_ls_filter_json() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["ls", "--filter", "priority=High", "--json"]);
    let rows: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json_field(&rows, "_id"), ["t-1", "t-3"]);
}

#[test]
fn test_ls_filters_combine() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&[
        "ls",
        "-f",
        "project=Portal",
        "-f",
        "assignee=di",
        "--json",
    ]);
    let rows: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json_field(&rows, "_id"), ["t-3"]);
}

#[test]
fn test_ls_sort_by_name() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["ls", "--sort", "name", "--json"]);
    let rows: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        json_field(&rows, "name"),
        ["Login crash", "Slow search", "Typo on landing page"]
    );
}

#[test]
fn test_ls_sort_priority_descending_is_stable() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["ls", "--sort", "priority", "--desc", "--json"]);
    let rows: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json_field(&rows, "_id"), ["t-1", "t-3", "t-2"]);
}

#[test]
fn test_ls_sort_created_date() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["ls", "--sort", "created", "--json"]);
    let rows: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json_field(&rows, "_id"), ["t-2", "t-3", "t-1"]);
}

#[test]
fn test_ls_no_matches() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["ls", "--filter", "status=Reopened"]);

    assert!(output.contains("No tickets match the current filters."));
    assert!(output.contains("0 of 3 ticket(s)"));
}

#[test]
fn test_ls_unknown_column_fails() {
    let board = BoardTest::with_fixture();
    let stderr = board.run_failure(&["ls", "--filter", "severity=High"]);
    assert!(stderr.contains("unknown column 'severity'"));
}

#[test]
fn test_ls_action_column_cannot_filter() {
    let board = BoardTest::with_fixture();
    let stderr = board.run_failure(&["ls", "--filter", "action=Details"]);
    assert!(stderr.contains("does not support filtering"));
}

#[test]
fn test_ls_without_source_fails() {
    let board = BoardTest::new();
    let output = board.run(&["ls"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no ticket source configured"));
}

#[test]
fn test_ls_malformed_file_fails() {
    let board = BoardTest::new();
    board.write_file("tickets.json", "{\"count\": 3}");

    let stderr = board.run_failure(&["ls"]);
    assert!(stderr.contains("API error"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_ticket_detail() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["show", "t-1"]);

    assert!(output.contains("Details"));
    assert!(output.contains("App crashes on login"));
    assert!(output.contains("Assigned Dev"));
    assert!(output.contains("bo"));
}

#[test]
fn test_show_unassigned_json() {
    let board = BoardTest::with_fixture();
    let output = board.run_success(&["show", "t-2", "--json"]);
    let fields: Value = serde_json::from_str(&output).unwrap();

    let labels = json_field(&fields, "label");
    assert_eq!(
        labels,
        [
            "Name",
            "Id",
            "Description",
            "Submitter",
            "Assigned Dev",
            "priority",
            "status",
            "type"
        ]
    );
    assert_eq!(fields[4]["value"], "");
    assert_eq!(fields[1]["value"], "t-2");
}

#[test]
fn test_show_unknown_ticket_fails() {
    let board = BoardTest::with_fixture();
    let stderr = board.run_failure(&["show", "t-404"]);
    assert!(stderr.contains("ticket 't-404' not found"));
}

// ============================================================================
// columns and config
// ============================================================================

#[test]
fn test_columns_json() {
    let board = BoardTest::new();
    let output = board.run(&["columns", "--json"]);
    assert!(output.status.success());

    let columns: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json_field(&columns, "key"),
        [
            "name",
            "project",
            "submitter",
            "assigned_developer",
            "priority",
            "status",
            "type",
            "created_date",
            "action"
        ]
    );
    assert_eq!(columns[8]["filter"], "-");
    assert_eq!(columns[0]["filter"], "contains");
}

#[test]
fn test_local_config_file_is_used() {
    let board = BoardTest::with_fixture();
    board.write_file(
        ".ticketboard.yaml",
        "source:\n  file: tickets.json\nexact_match_columns:\n  - priority\n",
    );

    let output = board.run(&["ls", "--filter", "priority=Hig", "--json"]);
    assert!(output.status.success());
    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(rows.as_array().unwrap().is_empty());

    let output = board.run(&["ls", "--filter", "priority=High", "--json"]);
    let rows: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json_field(&rows, "_id"), ["t-1", "t-3"]);
}

// ============================================================================
// browse
// ============================================================================

#[test]
fn test_browse_script() {
    let board = BoardTest::with_fixture();
    let output = board.run_browse("filter project Portal\nsort name\nsort name\nopen 1\nquit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 of 3 ticket(s)"));
    assert!(stdout.contains("Name ▼"));
    assert!(stdout.contains("filter: Project~\"Portal\""));
    // Row 1 under a descending name sort is "Slow search"
    assert!(stdout.contains("t-3"));
    assert!(!stdout.contains("t-1"));
}

#[test]
fn test_browse_reports_bad_command() {
    let board = BoardTest::with_fixture();
    let output = board.run_browse("frobnicate\nquit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unknown command"));
}

#[test]
fn test_browse_shows_load_failure() {
    let board = BoardTest::new();
    board.write_file("tickets.json", "not json");
    let output = board.run_browse("quit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Could not load tickets"));
}
