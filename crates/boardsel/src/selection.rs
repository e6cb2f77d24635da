use crate::discovery::DeviceRecord;
use crate::error::Result;
use serde_json::{Map, Value};
use std::path::Path;

pub const PORT_KEY: &str = "port";
pub const BOARD_KEY: &str = "board";

/// The JSON object holding the user's chosen board.
///
/// Only `port` and `board` are interpreted. Every other key is kept as-is,
/// in its original order, when the file is written back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedSelection {
    values: Map<String, Value>,
}

impl SavedSelection {
    /// Reads a selection file.
    ///
    /// Fails with an I/O error when the file cannot be read and with a JSON
    /// error when it is not a JSON object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let values: Map<String, Value> = serde_json::from_str(content)?;
        Ok(Self { values })
    }

    /// Writes the selection back, replacing the file's content.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.values)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn port(&self) -> Option<&str> {
        self.values.get(PORT_KEY).and_then(Value::as_str)
    }

    pub fn board(&self) -> Option<&str> {
        self.values.get(BOARD_KEY).and_then(Value::as_str)
    }

    /// The saved board, if both port and board are set.
    pub fn saved_device(&self) -> Option<DeviceRecord> {
        match (self.port(), self.board()) {
            (Some(port), Some(board)) => Some(DeviceRecord::new(port, board)),
            _ => None,
        }
    }

    /// Whether `device` is the saved board.
    pub fn selects(&self, device: &DeviceRecord) -> bool {
        match (self.port(), self.board()) {
            (Some(port), Some(board)) => device.matches(port, board),
            _ => false,
        }
    }

    pub fn set_device(&mut self, device: &DeviceRecord) {
        self.values
            .insert(PORT_KEY.to_string(), Value::String(device.port.clone()));
        self.values.insert(
            BOARD_KEY.to_string(),
            Value::String(device.board_identifier.clone()),
        );
    }
}

/// Where the saved selection lives.
pub trait SelectionStore {
    fn load(&self, path: &Path) -> Result<SavedSelection>;
    fn save(&self, selection: &SavedSelection, path: &Path) -> Result<()>;
}

/// Keeps the selection as a JSON file on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileStore;

impl SelectionStore for JsonFileStore {
    fn load(&self, path: &Path) -> Result<SavedSelection> {
        SavedSelection::load(path)
    }

    fn save(&self, selection: &SavedSelection, path: &Path) -> Result<()> {
        selection.save(path)
    }
}
