pub mod device;
pub mod table;

pub use device::DeviceRecord;
pub use table::{header_columns, parse_board_table, HeaderColumn};

use crate::error::Result;
use crate::runner::{run_command_line, CommandRunner};

/// Lists the boards currently attached to the host.
///
/// Runs `command_line` (normally `arduino-cli board list`) through `runner`
/// and parses the table it prints.
pub fn discover_devices<R: CommandRunner + ?Sized>(
    runner: &R,
    command_line: &str,
) -> Result<Vec<DeviceRecord>> {
    let output = run_command_line(runner, command_line)?;
    let devices = parse_board_table(&output);
    log::info!("Discovered {} board(s)", devices.len());
    Ok(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardselError;
    use crate::runner::testing::StaticRunner;

    const OUTPUT: &str = "\
Port         Protocol Type              Board Name  FQBN            Core       \n\
/dev/ttyACM0 serial   Serial Port (USB) Arduino Uno arduino:avr:uno arduino:avr\n\
\n";

    #[test]
    fn test_discover_devices() {
        let runner = StaticRunner::new(OUTPUT);
        let devices = discover_devices(&runner, "arduino-cli board list").unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].port, "/dev/ttyACM0");
        assert_eq!(devices[0].board_identifier, "arduino:avr:uno");
    }

    #[test]
    fn test_discover_devices_propagates_tool_failure() {
        let runner = StaticRunner::failing();
        let result = discover_devices(&runner, "arduino-cli board list");
        assert!(matches!(result, Err(BoardselError::ExternalTool { .. })));
    }
}
