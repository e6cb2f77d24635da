use boardsel_lib::util::device_table;
use boardsel_lib::{header_columns, parse_board_table, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use std::io::Read;
use std::path::Path;

pub fn handle_parse_command(input: &Path, columns: bool, json: bool) -> Result<()> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(input)?
    };

    let devices = parse_board_table(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    if columns {
        let header = text.lines().next().unwrap_or_default();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Column").fg(Color::Cyan),
            Cell::new("Start").fg(Color::Cyan),
            Cell::new("End").fg(Color::Cyan),
        ]);
        for column in header_columns(header) {
            table.add_row(vec![
                Cell::new(&column.label),
                Cell::new(column.start),
                Cell::new(column.end),
            ]);
        }
        println!("{}", table);
    }

    if devices.is_empty() {
        println!("{}", style("No boards in input").yellow());
        return Ok(());
    }

    println!("{}", device_table(&devices));
    Ok(())
}
