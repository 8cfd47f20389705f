//! Workbook sheet names, required columns, and reader errors.
//!
//! A workbook is either an Excel file or a directory holding one CSV file per
//! sheet, named `<sheet>.csv`.
//! Only column presence is validated; cell contents are checked row by row
//! by the loader.

use thiserror::Error;

pub const POINT_SHEET: &str = "POINT";
pub const STRATA_SHEET: &str = "STRATA_MAIN";
pub const SOIL_DESCRIPTION_SHEET: &str = "SOIL_DESCRIPTION";
pub const MOISTURE_SHEET: &str = "Moisture Content";
pub const PSD_SHEET: &str = "PSD";
pub const ATTERBERG_SHEET: &str = "Atterberg Limits";
pub const ROCK_SHEET: &str = "Rock Results";

pub const POINT_COLUMNS: [&str; 4] = ["PointID", "East", "North", "Elevation"];
pub const STRATA_COLUMNS: [&str; 4] = ["PointID", "Depth", "Bottom", "Geology_Unit_1"];
/// Optional column of `STRATA_MAIN`; `TRUE` marks a sub-layer row.
pub const SUB_LAYER_COLUMN: &str = "Sub_Layer";
pub const SOIL_DESCRIPTION_COLUMNS: [&str; 4] =
    ["PointID", "Depth", "Bottom", "Compiled_Description"];
pub const MOISTURE_COLUMNS: [&str; 6] = [
    "ID",
    "Origin",
    "From (m)",
    "To (m)",
    "Elevation (m)",
    "Moisture Content (%)",
];

/// Identifying columns of `PSD`; every other column is a sieve size (mm).
pub const PSD_COLUMNS: [&str; 4] = ["ID", "From (m)", "To (m)", "Geology Unit"];
pub const ATTERBERG_COLUMNS: [&str; 5] = ["ID", "From (m)", "LL", "PI", "Geology Unit"];
pub const ROCK_COLUMNS: [&str; 7] = [
    "ID",
    "From (m)",
    "To (m)",
    "Elevation (m)",
    "Is(50) corrected (MPa)",
    "UCS (MPa)",
    "Geology Unit",
];

/// Errors raised while reading a workbook. Always fatal for the render.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// Required sheet not present in the workbook
    #[error("Missing sheet '{0}'")]
    MissingSheet(String),

    /// Required column not present in a sheet's header row
    #[error("Sheet '{sheet}' is missing column '{column}'")]
    MissingColumn { sheet: String, column: String },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read a sheet file
    #[error("Failed to read workbook: {0}")]
    Io(#[from] std::io::Error),

    /// Excel workbook could not be opened or a worksheet could not be read
    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),
}

/// Resolve the positions of `required` columns in `headers`.
///
/// Header names are compared after trimming whitespace. Returns the index of
/// each required column in the order given.
pub fn column_indices(
    sheet: &str,
    headers: &csv::StringRecord,
    required: &[&str],
) -> Result<Vec<usize>, ReaderError> {
    required
        .iter()
        .map(|column| {
            optional_column_index(headers, column).ok_or_else(|| ReaderError::MissingColumn {
                sheet: sheet.to_string(),
                column: column.to_string(),
            })
        })
        .collect()
}

/// Position of an optional column, if the sheet has it.
pub fn optional_column_index(headers: &csv::StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == column)
}
