//! Reconciles the live board list with the saved selection file.

use crate::discovery::{discover_devices, DeviceRecord};
use crate::error::{BoardselError, Result};
use crate::runner::CommandRunner;
use crate::selection::{JsonFileStore, SavedSelection, SelectionStore};
use std::fmt;
use std::path::{Path, PathBuf};

/// A recoverable problem met while resolving the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The selection file could not be opened or read.
    ConfigUnreadable { path: PathBuf, reason: String },
    /// The selection file is not a JSON object.
    ConfigInvalid { path: PathBuf, reason: String },
    /// The saved port and board do not match any connected board.
    SelectionMismatch {
        port: Option<String>,
        board: Option<String>,
    },
    /// Several boards are connected; `chosen` was picked.
    MultipleDevices { chosen: DeviceRecord, count: usize },
    /// The updated selection could not be written back.
    ConfigWriteFailed { path: PathBuf, reason: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ConfigUnreadable { path, reason } => {
                write!(f, "Board config {} could not be opened: {}", path.display(), reason)
            }
            Warning::ConfigInvalid { path, reason } => {
                write!(f, "Board config {} is invalid JSON: {}", path.display(), reason)
            }
            Warning::SelectionMismatch { port, board } => write!(
                f,
                "Saved port {} and board {} do not match any connected board, updating config",
                port.as_deref().unwrap_or("<unset>"),
                board.as_deref().unwrap_or("<unset>")
            ),
            Warning::MultipleDevices { chosen, count } => write!(
                f,
                "{} boards connected, using the first one ({})",
                count, chosen
            ),
            Warning::ConfigWriteFailed { path, reason } => {
                write!(f, "Board config {} could not be written: {}", path.display(), reason)
            }
        }
    }
}

/// Outcome of [`Reconciler::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// `false` when the device was rebuilt from the saved selection only.
    pub from_live_discovery: bool,
    pub device: DeviceRecord,
    pub warnings: Vec<Warning>,
    /// Whether the selection file was rewritten.
    pub config_updated: bool,
}

/// Picks the board to use from live discovery and the saved selection.
///
/// Every call runs discovery again; nothing is remembered between calls.
pub struct Reconciler<R: CommandRunner, S: SelectionStore = JsonFileStore> {
    runner: R,
    store: S,
    tool_command: String,
}

impl<R: CommandRunner> Reconciler<R> {
    pub fn new(runner: R, tool_command: impl Into<String>) -> Self {
        Self::with_store(runner, JsonFileStore, tool_command)
    }
}

impl<R: CommandRunner, S: SelectionStore> Reconciler<R, S> {
    pub fn with_store(runner: R, store: S, tool_command: impl Into<String>) -> Self {
        Self {
            runner,
            store,
            tool_command: tool_command.into(),
        }
    }

    /// Lists the connected boards.
    pub fn discover(&self) -> Result<Vec<DeviceRecord>> {
        discover_devices(&self.runner, &self.tool_command)
    }

    /// Resolves the board to use and keeps the selection file in line with it.
    ///
    /// A failing discovery tool is an error. So is the case where no board is
    /// connected and the selection file gives no usable port and board.
    /// Everything else is reported through [`Resolution::warnings`].
    pub fn resolve<P: AsRef<Path>>(&self, config_path: P) -> Result<Resolution> {
        let config_path = config_path.as_ref();
        let ports = self.discover()?;

        let mut warnings = Vec::new();
        let selection = load_selection(&self.store, config_path, &mut warnings);

        if ports.is_empty() {
            return resolve_offline(config_path, selection, warnings);
        }

        if let Some(selection) = &selection {
            if let Some(device) = ports.iter().find(|p| selection.selects(p)) {
                log::info!("Saved board {} is connected", device);
                return Ok(Resolution {
                    from_live_discovery: true,
                    device: device.clone(),
                    warnings,
                    config_updated: false,
                });
            }

            warn(
                &mut warnings,
                Warning::SelectionMismatch {
                    port: selection.port().map(str::to_string),
                    board: selection.board().map(str::to_string),
                },
            );
        }

        let count = ports.len();
        let device = ports[0].clone();

        if count > 1 {
            warn(
                &mut warnings,
                Warning::MultipleDevices {
                    chosen: device.clone(),
                    count,
                },
            );
        }

        let mut config_updated = false;
        if let Some(mut selection) = selection {
            selection.set_device(&device);
            match self.store.save(&selection, config_path) {
                Ok(()) => {
                    log::info!("Saved {} to {}", device, config_path.display());
                    config_updated = true;
                }
                Err(e) => warn(
                    &mut warnings,
                    Warning::ConfigWriteFailed {
                        path: config_path.to_path_buf(),
                        reason: e.to_string(),
                    },
                ),
            }
        }

        Ok(Resolution {
            from_live_discovery: true,
            device,
            warnings,
            config_updated,
        })
    }
}

fn resolve_offline(
    config_path: &Path,
    selection: Option<SavedSelection>,
    warnings: Vec<Warning>,
) -> Result<Resolution> {
    let selection = selection.ok_or_else(|| BoardselError::NoDeviceAvailable {
        path: config_path.to_path_buf(),
        reason: "the config could not be loaded".to_string(),
    })?;

    let device = selection
        .saved_device()
        .ok_or_else(|| BoardselError::NoDeviceAvailable {
            path: config_path.to_path_buf(),
            reason: "the config has no port and board".to_string(),
        })?;

    log::info!("No board connected, using saved {}", device);

    Ok(Resolution {
        from_live_discovery: false,
        device,
        warnings,
        config_updated: false,
    })
}

fn load_selection<S: SelectionStore>(
    store: &S,
    path: &Path,
    warnings: &mut Vec<Warning>,
) -> Option<SavedSelection> {
    match store.load(path) {
        Ok(selection) => Some(selection),
        Err(BoardselError::Json(e)) => {
            warn(
                warnings,
                Warning::ConfigInvalid {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            );
            None
        }
        Err(e) => {
            warn(
                warnings,
                Warning::ConfigUnreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            );
            None
        }
    }
}

/// Warnings reach the caller through [`Resolution::warnings`] only.
fn warn(warnings: &mut Vec<Warning>, warning: Warning) {
    log::debug!("{}", warning);
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::StaticRunner;
    use tempfile::TempDir;

    const HEADER: &str =
        "Port         Protocol Type              Board Name  FQBN            Core       ";
    const UNO: &str =
        "/dev/ttyACM0 serial   Serial Port (USB) Arduino Uno arduino:avr:uno arduino:avr";

    fn reconciler(output: &str) -> Reconciler<StaticRunner> {
        Reconciler::new(StaticRunner::new(output), "arduino-cli board list")
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("arduino.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_runs_configured_tool() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, r#"{"port":"/dev/ttyACM0","board":"arduino:avr:uno"}"#);

        let reconciler = reconciler(&format!("{}\n{}\n", HEADER, UNO));
        reconciler.resolve(&path).unwrap();

        let calls = reconciler.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "arduino-cli");
    }

    #[test]
    fn test_saved_selection_without_keys_and_no_board_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, r#"{"sketch":"main.ino"}"#);

        let result = reconciler(HEADER).resolve(&path);
        assert!(matches!(result, Err(BoardselError::NoDeviceAvailable { .. })));
    }

    #[test]
    fn test_selection_without_keys_is_filled_in() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "{}");

        let resolution = reconciler(&format!("{}\n{}\n", HEADER, UNO))
            .resolve(&path)
            .unwrap();

        assert!(resolution.config_updated);
        assert_eq!(
            resolution.warnings,
            vec![Warning::SelectionMismatch {
                port: None,
                board: None
            }]
        );
        let saved = SavedSelection::load(&path).unwrap();
        assert_eq!(saved.port(), Some("/dev/ttyACM0"));
        assert_eq!(saved.board(), Some("arduino:avr:uno"));
    }

    #[test]
    fn test_missing_config_with_board_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("arduino.json");

        let resolution = reconciler(&format!("{}\n{}\n", HEADER, UNO))
            .resolve(&path)
            .unwrap();

        assert!(resolution.from_live_discovery);
        assert!(!resolution.config_updated);
        assert!(matches!(
            resolution.warnings.as_slice(),
            [Warning::ConfigUnreadable { .. }]
        ));
        assert!(!path.exists());
    }

    /// Reads like the file store but refuses every write.
    struct ReadOnlyStore;

    impl SelectionStore for ReadOnlyStore {
        fn load(&self, path: &Path) -> Result<SavedSelection> {
            JsonFileStore.load(path)
        }

        fn save(&self, _selection: &SavedSelection, _path: &Path) -> Result<()> {
            Err(BoardselError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_write_failure_keeps_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, r#"{"port":"X","board":"Y"}"#);

        let reconciler = Reconciler::with_store(
            StaticRunner::new(&format!("{}\n{}\n", HEADER, UNO)),
            ReadOnlyStore,
            "arduino-cli board list",
        );
        let resolution = reconciler.resolve(&path).unwrap();

        assert!(resolution.from_live_discovery);
        assert_eq!(resolution.device.port, "/dev/ttyACM0");
        assert!(!resolution.config_updated);
        match resolution.warnings.as_slice() {
            [Warning::SelectionMismatch { .. }, Warning::ConfigWriteFailed { path: failed, reason }] => {
                assert_eq!(failed, &path);
                assert!(reason.contains("read-only"));
            }
            other => panic!("unexpected warnings: {:?}", other),
        }
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"port":"X","board":"Y"}"#
        );
    }

    #[test]
    fn test_warning_messages() {
        let warning = Warning::MultipleDevices {
            chosen: DeviceRecord::new("COM3", "arduino:avr:uno"),
            count: 2,
        };
        assert_eq!(
            warning.to_string(),
            "2 boards connected, using the first one (arduino:avr:uno on COM3)"
        );

        let warning = Warning::SelectionMismatch {
            port: Some("X".to_string()),
            board: None,
        };
        assert!(warning.to_string().contains("Saved port X and board <unset>"));
    }
}
