//! Table loading from CSV and spreadsheet files
//!
//! Loaders infer a [`CellValue`] for every cell so the transformer never has
//! to guess types from text. A CSV record that cannot be read becomes a
//! row-level error inside the returned [`Table`]; only failures that prevent
//! reading the file at all are returned as [`ConvertError`].

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::{ConvertError, RowError};
use crate::table::Table;
use crate::value::CellValue;

/// Extensions read through the spreadsheet reader
pub const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Extensions read through the CSV reader
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

/// Cell contents treated as missing in CSV input
pub const MISSING_MARKERS: &[&str] = &["", "NaN", "nan", "NA", "N/A", "null", "NULL", "None"];

/// Source from which to load a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Csv(PathBuf),
    /// Excel workbook or OpenDocument spreadsheet; the first sheet is read
    Excel(PathBuf),
}

impl TableSource {
    /// Classify a path by its extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| ConvertError::UnsupportedFormat(path.to_path_buf()))?;

        if CSV_EXTENSIONS.contains(&ext.as_str()) {
            Ok(TableSource::Csv(path.to_path_buf()))
        } else if EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            Ok(TableSource::Excel(path.to_path_buf()))
        } else {
            Err(ConvertError::UnsupportedFormat(path.to_path_buf()))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TableSource::Csv(p) | TableSource::Excel(p) => p,
        }
    }

    pub fn load(&self) -> Result<Table, ConvertError> {
        match self {
            TableSource::Csv(p) => load_csv(p),
            TableSource::Excel(p) => load_excel(p),
        }
    }
}

/// Check if a path has an extension some loader understands
pub fn is_supported(path: &Path) -> bool {
    TableSource::from_path(path).is_ok()
}

/// Trait for loading a table from a location
pub trait TableLoader {
    fn load(&self, path: &Path) -> Result<Table, ConvertError>;
}

/// Filesystem loader choosing the reader from the file extension
pub struct FileLoader;

impl TableLoader for FileLoader {
    fn load(&self, path: &Path) -> Result<Table, ConvertError> {
        if !path.is_file() {
            return Err(ConvertError::InvalidPath(path.to_path_buf()));
        }
        let source = TableSource::from_path(path)?;
        debug!(source = ?source, "loading {}", source.path().display());
        source.load()
    }
}

/// Load a CSV file whose first record is the header
pub fn load_csv(path: &Path) -> Result<Table, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::Load {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    read_csv(file).map_err(|e| ConvertError::Load {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Read CSV data from any reader
///
/// Only a bad header fails the whole read; bad records become row errors.
pub fn read_csv<R: Read>(input: R) -> Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader.headers()?.clone();
    let mut table = Table::new(
        headers
            .iter()
            .enumerate()
            .map(|(i, header)| column_name(i, header)),
    );

    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => table.push_row(record.iter().map(infer_csv_cell).collect()),
            Err(e) => table.push_error(RowError::Malformed {
                row,
                reason: e.to_string(),
            }),
        }
    }

    debug!(
        columns = table.columns().len(),
        rows = table.len(),
        "read CSV table"
    );
    Ok(table)
}

/// Infer the type of a CSV cell
pub fn infer_csv_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if MISSING_MARKERS.contains(&trimmed) {
        return CellValue::Empty;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Boolean(false);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return CellValue::Integer(n);
    }
    // "inf" and friends stay text
    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => CellValue::Decimal(x),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Load the first worksheet of a spreadsheet whose first row is the header
pub fn load_excel(path: &Path) -> Result<Table, ConvertError> {
    let load_error = |reason: String| ConvertError::Load {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| load_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| load_error("workbook has no worksheets".to_string()))?
        .map_err(|e| load_error(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(i, cell))
            .collect(),
        None => return Ok(Table::default()),
    };
    let mut table = Table::new(headers);

    for cells in rows {
        table.push_row(cells.iter().map(convert_excel_cell).collect());
    }

    debug!(
        path = %path.display(),
        columns = table.columns().len(),
        rows = table.len(),
        "read worksheet"
    );
    Ok(table)
}

/// Column name for a header cell; blank headers get a positional name
pub fn column_name(index: usize, header: &str) -> String {
    if header.trim().is_empty() {
        format!("Unnamed: {}", index)
    } else {
        header.to_string()
    }
}

fn header_name(index: usize, cell: &Data) -> String {
    column_name(index, &cell.to_string())
}

/// Convert a spreadsheet cell
///
/// Error cells (`#DIV/0!`, `#N/A`, ...) keep their displayed text.
pub fn convert_excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(n) => CellValue::Integer(*n),
        Data::Float(x) => float_cell(*x),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::Text(datetime.to_string()),
            None => float_cell(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

/// Spreadsheets store every number as a float; whole values become integers
fn float_cell(x: f64) -> CellValue {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if x.is_finite() && x.fract() == 0.0 && x >= -I64_BOUND && x < I64_BOUND {
        CellValue::Integer(x as i64)
    } else {
        CellValue::Decimal(x)
    }
}
