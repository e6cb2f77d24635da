use crate::discovery::DeviceRecord;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

/// Renders boards the way `arduino-cli board list` lays them out.
pub fn device_table(devices: &[DeviceRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Port").fg(Color::Cyan),
        Cell::new("Protocol").fg(Color::Cyan),
        Cell::new("Type").fg(Color::Cyan),
        Cell::new("Board Name").fg(Color::Cyan),
        Cell::new("FQBN").fg(Color::Cyan),
        Cell::new("Core").fg(Color::Cyan),
    ]);

    for device in devices {
        table.add_row(vec![
            Cell::new(&device.port),
            Cell::new(or_dash(device.protocol.as_deref())),
            Cell::new(or_dash(device.device_type.as_deref())),
            Cell::new(or_dash(device.board_name.as_deref())),
            Cell::new(or_dash(Some(device.board_identifier.as_str()))),
            Cell::new(or_dash(device.core.as_deref())),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("serial")), "serial");
    }

    #[test]
    fn test_device_table_rows() {
        let mut uno = DeviceRecord::new("/dev/ttyACM0", "arduino:avr:uno");
        uno.board_name = Some("Arduino Uno".to_string());
        let table = device_table(&[uno, DeviceRecord::new("/dev/ttyS0", "")]);

        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("Arduino Uno"));
        assert!(rendered.contains("/dev/ttyS0"));
    }
}
