use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::core::table::{Cell, RawTable, Table, Value};
use crate::parsing::delimited::LoadError;

/// First worksheet of an `.xlsx` workbook
fn first_sheet(path: &Path) -> Result<Range<Data>, LoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::EmptyInput)?
        .map_err(LoadError::from)
}

fn header_name(data: &Data) -> String {
    let name = data.to_string();
    match name.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

#[allow(clippy::cast_precision_loss)] // Spreadsheet integers are small counts
fn cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::text(s.as_str())),
        Data::Float(n) => Some(Value::Number(*n)),
        Data::Int(n) => Some(Value::Number(*n as f64)),
        other => Some(Value::text(other.to_string())),
    }
}

/// Read the first row of the first worksheet
///
/// # Errors
///
/// Returns `LoadError::EmptyInput` if the workbook has no sheet or the sheet
/// is empty, or `LoadError::Spreadsheet` if the file is not a valid workbook.
pub fn read_header(path: &Path) -> Result<Vec<String>, LoadError> {
    let sheet = first_sheet(path)?;
    let header = sheet.rows().next().ok_or(LoadError::EmptyInput)?;
    Ok(header.iter().map(header_name).collect())
}

/// Load the first worksheet as a table, taking its first row as the header.
///
/// Empty and error cells become absent. Numeric cells load as numbers.
///
/// # Errors
///
/// Returns `LoadError::EmptyInput` if the workbook has no sheet or the sheet
/// is empty, or `LoadError::Spreadsheet` if the file is not a valid workbook.
pub fn read_table(path: &Path) -> Result<RawTable, LoadError> {
    let sheet = first_sheet(path)?;
    let mut rows = sheet.rows();
    let header = rows.next().ok_or(LoadError::EmptyInput)?;

    let mut table = Table::new(header.iter().map(header_name));
    for row in rows {
        table.push_row(row.iter().map(cell).collect());
    }
    Ok(table)
}
