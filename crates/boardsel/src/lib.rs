pub mod config;
pub mod discovery;
pub mod error;
pub mod reconcile;
pub mod runner;
pub mod selection;
pub mod util;

pub use config::Config;
pub use discovery::{discover_devices, header_columns, parse_board_table, DeviceRecord, HeaderColumn};
pub use error::{BoardselError, Result};
pub use reconcile::{Reconciler, Resolution, Warning};
pub use runner::{run_command_line, tool_version, CommandRunner, SystemRunner};
pub use selection::{JsonFileStore, SavedSelection, SelectionStore};
