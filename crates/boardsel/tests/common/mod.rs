#![allow(dead_code)]

use boardsel_lib::{BoardselError, CommandRunner, Result};
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str =
    "Port         Protocol Type              Board Name  FQBN            Core       ";

/// Stands in for `arduino-cli board list`.
pub struct CannedRunner {
    output: Option<String>,
}

impl CannedRunner {
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
        }
    }

    pub fn with_boards(rows: &[(&str, &str, &str)]) -> Self {
        Self::with_output(board_table(rows))
    }

    pub fn failing() -> Self {
        Self { output: None }
    }
}

impl CommandRunner for CannedRunner {
    fn run(&self, program: &str, _args: &[String]) -> Result<String> {
        self.output.clone().ok_or_else(|| BoardselError::ExternalTool {
            tool: program.to_string(),
            message: "exited with code 1".to_string(),
        })
    }
}

/// Formats one table row per `(port, board name, fqbn)` on the header's grid.
pub fn board_table(rows: &[(&str, &str, &str)]) -> String {
    let mut text = format!("{}\n", HEADER);
    for (port, name, fqbn) in rows {
        let core = fqbn.rsplitn(2, ':').nth(1).unwrap_or("");
        text.push_str(&format!(
            "{:<13}{:<9}{:<18}{:<12}{:<16}{:<11}\n",
            port, "serial", "Serial Port (USB)", name, fqbn, core
        ));
    }
    text.push('\n');
    text
}

pub struct SelectionFixture {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl SelectionFixture {
    pub fn new(content: &str) -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("arduino.json");
        std::fs::write(&path, content).unwrap();
        Self { temp_dir, path }
    }

    pub fn missing() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("arduino.json");
        Self { temp_dir, path }
    }

    pub fn content(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.content()).unwrap()
    }
}
