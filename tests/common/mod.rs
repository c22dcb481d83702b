#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use mock_data::TicketBuilder;
use ticketboard::Ticket;

/// Helper struct to run ticketboard commands in an isolated temp directory
pub struct BoardTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl BoardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        BoardTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_ticketboard").to_string(),
        }
    }

    /// A test directory with the standard fixture written to `tickets.json`
    pub fn with_fixture() -> Self {
        let test = Self::new();
        test.write_tickets(&fixture_tickets());
        test
    }

    pub fn tickets_path(&self) -> PathBuf {
        self.temp_dir.path().join("tickets.json")
    }

    pub fn write_tickets(&self, tickets: &[Ticket]) {
        let body = serde_json::to_string_pretty(tickets).expect("tickets should serialize");
        fs::write(self.tickets_path(), body).expect("Failed to write tickets fixture");
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            // Keep the user's config and environment out of the test
            .env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join(".config"))
            .env_remove("TICKETBOARD_URL")
            .env_remove("TICKETBOARD_TOKEN")
            .env_remove("TICKETBOARD_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute ticketboard command")
    }

    /// Run with the fixture file as the ticket source
    pub fn run_with_file(&self, args: &[&str]) -> Output {
        let path = self.tickets_path();
        let mut full: Vec<&str> = args.to_vec();
        full.push("--file");
        full.push(path.to_str().expect("temp path should be utf-8"));
        self.run(&full)
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run_with_file(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run_with_file(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run `browse` with `script` piped to stdin
    pub fn run_browse(&self, script: &str) -> Output {
        let path = self.tickets_path();
        let mut child = self
            .command(&["browse", "--file", path.to_str().expect("temp path should be utf-8")])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn ticketboard browse");
        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(script.as_bytes())
            .expect("Failed to write browse script");
        child
            .wait_with_output()
            .expect("Failed to wait for ticketboard browse")
    }
}

/// Three tickets covering assigned/unassigned, every priority rank used by
/// the tests, and out-of-order creation dates.
pub fn fixture_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new("t-1")
            .name("Login crash")
            .project("Portal")
            .submitter("ana")
            .assigned("bo")
            .priority("High")
            .status("Open")
            .ticket_type("Bug")
            .description("App crashes on login")
            .created("2024-03-02T10:00:00Z")
            .build(),
        TicketBuilder::new("t-2")
            .name("Typo on landing page")
            .project("Website")
            .submitter("cy")
            .priority("Low")
            .status("Closed")
            .ticket_type("Bug")
            .created("2024-01-15T08:30:00Z")
            .build(),
        TicketBuilder::new("t-3")
            .name("Slow search")
            .project("Portal")
            .submitter("ana")
            .assigned("di")
            .priority("High")
            .status("In Progress")
            .ticket_type("Feature")
            .created("2024-02-20T12:00:00Z")
            .build(),
    ]
}
