//! Parser for the fixed-width table printed by `arduino-cli board list`.
//!
//! The tool aligns every cell to a character grid, so column boundaries are
//! taken from the header line and each data line is sliced at the same
//! character offsets.
//!
//! ```text
//! Port         Protocol Type              Board Name  FQBN            Core
//! /dev/ttyACM0 serial   Serial Port (USB) Arduino Uno arduino:avr:uno arduino:avr
//! ```

use super::device::DeviceRecord;

/// Header label that the tool splits across two tokens ("Board Name").
const SPLIT_HEADER_PREFIX: &str = "Board";

/// A column of the table, as character offsets into each line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderColumn {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Parses the tool output into device records.
///
/// Lines whose length differs from the header's are dropped: they cannot be
/// sliced on the header's grid. A header without any column yields no records.
pub fn parse_board_table(text: &str) -> Vec<DeviceRecord> {
    let mut lines = text.lines();
    let header = match lines.next() {
        Some(header) => header,
        None => return Vec::new(),
    };

    let columns = header_columns(header);
    if columns.is_empty() {
        log::debug!("No columns found in header {:?}", header);
        return Vec::new();
    }

    let width = header.chars().count();
    lines
        .filter(|line| line.chars().count() == width)
        .map(|line| parse_row(line, &columns))
        .collect()
}

/// Finds the column spans of a header line.
///
/// A column is a run of word characters followed by at least one space; the
/// trailing spaces belong to the column. A label with nothing after it does
/// not form a column.
pub fn header_columns(header: &str) -> Vec<HeaderColumn> {
    let chars: Vec<char> = header.chars().collect();
    let mut columns = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if !is_word_char(chars[pos]) {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        let label_end = pos;
        while pos < chars.len() && chars[pos] == ' ' {
            pos += 1;
        }

        if pos > label_end {
            columns.push(HeaderColumn {
                label: chars[start..label_end].iter().collect(),
                start,
                end: pos,
            });
        }
    }

    merge_split_board_name(&mut columns);
    columns
}

/// Joins the "Board" column with the one after it, so that "Board Name"
/// becomes a single column. Only the first occurrence is merged.
fn merge_split_board_name(columns: &mut Vec<HeaderColumn>) {
    let idx = match columns
        .iter()
        .position(|c| c.label.contains(SPLIT_HEADER_PREFIX))
    {
        Some(idx) => idx,
        None => return,
    };

    if idx + 1 >= columns.len() {
        return;
    }

    let next = columns.remove(idx + 1);
    let column = &mut columns[idx];
    column.label = format!("{} {}", column.label, next.label);
    column.end = next.end;
}

fn parse_row(line: &str, columns: &[HeaderColumn]) -> DeviceRecord {
    let chars: Vec<char> = line.chars().collect();
    let mut values = columns.iter().map(|column| slice_cell(&chars, column));
    let mut next_value = || values.next().unwrap_or_default();

    let port = next_value();
    let protocol = next_value();
    let device_type = next_value();
    let board_name = next_value();
    let board_identifier = next_value();
    let core = next_value();

    DeviceRecord {
        port,
        board_identifier,
        protocol: non_empty(protocol),
        device_type: non_empty(device_type),
        board_name: non_empty(board_name),
        core: non_empty(core),
    }
}

fn slice_cell(chars: &[char], column: &HeaderColumn) -> String {
    let start = column.start.min(chars.len());
    let end = column.end.min(chars.len());
    let cell: String = chars[start..end].iter().collect();
    cell.trim().to_string()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
