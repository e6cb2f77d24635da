use serde::{Deserialize, Serialize};
use std::fmt;

/// A board reported by the device-listing tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub port: String,
    /// Fully qualified board name (FQBN).
    pub board_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core: Option<String>,
}

impl DeviceRecord {
    /// Creates a record that only knows its port and board identifier.
    pub fn new(port: impl Into<String>, board_identifier: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            board_identifier: board_identifier.into(),
            protocol: None,
            device_type: None,
            board_name: None,
            core: None,
        }
    }

    pub fn matches(&self, port: &str, board_identifier: &str) -> bool {
        self.port == port && self.board_identifier == board_identifier
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: &str = if self.board_identifier.is_empty() {
            "unknown board"
        } else {
            &self.board_identifier
        };
        match &self.board_name {
            Some(name) => write!(f, "{} ({}) on {}", name, board, self.port),
            None => write!(f, "{} on {}", board, self.port),
        }
    }
}
