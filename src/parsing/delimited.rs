use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::table::{RawTable, Table, Value};
use crate::parsing::spreadsheet;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Unsupported file extension '{0}': expected .csv, .tsv, .tab, .txt (optionally .gz) or .xlsx")]
    UnsupportedExtension(String),

    #[error("Input file has no header row")]
    EmptyInput,

    #[error("Line {line} has {found} fields but the header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// How a tabular file is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Delimited text, optionally gzip-compressed
    Delimited { delimiter: u8, gzip: bool },
    /// Excel workbook; only the first worksheet is read
    Xlsx,
}

impl TableFormat {
    /// Infer the layout from a file name
    ///
    /// # Errors
    ///
    /// Returns `LoadError::UnsupportedExtension` for anything other than
    /// `.csv`, `.tsv`, `.tab` or `.txt` (optionally followed by `.gz`), or `.xlsx`.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let (stem, gzip) = match name.strip_suffix(".gz") {
            Some(stem) => (stem, true),
            None => (name.as_str(), false),
        };

        let extension = Path::new(stem)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let delimiter = match extension {
            "csv" => b',',
            "tsv" | "tab" | "txt" => b'\t',
            "xlsx" if !gzip => return Ok(Self::Xlsx),
            other if gzip => return Err(LoadError::UnsupportedExtension(format!("{other}.gz"))),
            other => return Err(LoadError::UnsupportedExtension(other.to_string())),
        };

        Ok(Self::Delimited { delimiter, gzip })
    }
}

fn open_input(path: &Path, gzip: bool) -> Result<Box<dyn Read>, LoadError> {
    let file = File::open(path)?;
    if gzip {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn csv_reader<R: Read>(input: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

fn header_names(reader: &mut csv::Reader<impl Read>) -> Result<Vec<String>, LoadError> {
    let record = reader.headers()?;
    if record.is_empty() {
        return Err(LoadError::EmptyInput);
    }

    let mut names: Vec<String> = record.iter().map(str::to_string).collect();
    if let Some(first) = names.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
    Ok(names)
}

/// Read only the header row of a tabular file
///
/// # Errors
///
/// Returns `LoadError::UnsupportedExtension` for unknown file types,
/// `LoadError::EmptyInput` if there is no header, or IO/CSV errors.
pub fn read_header(path: &Path) -> Result<Vec<String>, LoadError> {
    match TableFormat::from_path(path)? {
        TableFormat::Delimited { delimiter, gzip } => {
            read_header_from(open_input(path, gzip)?, delimiter)
        }
        TableFormat::Xlsx => spreadsheet::read_header(path),
    }
}

/// Read only the header row from a reader
///
/// # Errors
///
/// Returns `LoadError::EmptyInput` if there is no header, or a CSV error.
pub fn read_header_from<R: Read>(input: R, delimiter: u8) -> Result<Vec<String>, LoadError> {
    header_names(&mut csv_reader(input, delimiter))
}

/// Load a full tabular file
///
/// # Errors
///
/// Returns `LoadError::UnsupportedExtension` for unknown file types,
/// `LoadError::EmptyInput` if there is no header, `LoadError::RaggedRow` if a row
/// has more fields than the header, or IO/CSV errors.
pub fn read_table(path: &Path) -> Result<RawTable, LoadError> {
    let table = match TableFormat::from_path(path)? {
        TableFormat::Delimited { delimiter, gzip } => {
            read_table_from(open_input(path, gzip)?, delimiter)?
        }
        TableFormat::Xlsx => spreadsheet::read_table(path)?,
    };
    debug!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Load a full table from a reader.
///
/// Empty fields become absent cells. Rows shorter than the header are padded
/// with absent cells.
///
/// # Errors
///
/// Returns `LoadError::EmptyInput` if there is no header, `LoadError::RaggedRow`
/// if a row has more fields than the header, or a CSV error.
pub fn read_table_from<R: Read>(input: R, delimiter: u8) -> Result<RawTable, LoadError> {
    let mut reader = csv_reader(input, delimiter);
    let columns = header_names(&mut reader)?;
    let width = columns.len();
    let mut table = Table::new(columns);

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map_or(i as u64 + 2, csv::Position::line);
            return Err(LoadError::RaggedRow {
                line,
                expected: width,
                found: record.len(),
            });
        }

        table.push_row(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| Value::text(field)))
                .collect(),
        );
    }

    Ok(table)
}

/// Write a table to a file.
///
/// The layout follows the file name (`.tsv` writes tabs, `.gz` compresses);
/// `.xlsx` and unrecognized extensions are written as CSV. Data goes to a temporary file in
/// the destination directory that is renamed over `path` once complete.
///
/// # Errors
///
/// Returns IO or CSV errors if the file cannot be written.
pub fn write_table(path: &Path, table: &Table) -> Result<(), LoadError> {
    let (delimiter, gzip) = match TableFormat::from_path(path) {
        Ok(TableFormat::Delimited { delimiter, gzip }) => (delimiter, gzip),
        Ok(TableFormat::Xlsx) => {
            warn!("Spreadsheet output is not supported; writing {} as CSV", path.display());
            (b',', false)
        }
        Err(e) => {
            warn!("{e}; writing {} as CSV", path.display());
            (b',', false)
        }
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(dir)?;

    if gzip {
        let mut encoder = GzEncoder::new(
            BufWriter::new(temp_file.as_file_mut()),
            Compression::default(),
        );
        write_table_to(&mut encoder, table, delimiter)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        write_table_to(&mut writer, table, delimiter)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| LoadError::Io(e.error))?;
    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Write a table as delimited text. Absent cells are written as empty fields.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_table_to<W: Write>(output: W, table: &Table, delimiter: u8) -> Result<(), LoadError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(output);

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(
            row.iter()
                .map(|cell| cell.as_ref().map(Value::to_string).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(())
}
