//! A workbook's sheets as CSV text, read from an Excel file or a directory.
//!
//! The loaders only ever see CSV text. An uploaded or local `.xlsx`/`.xls`
//! workbook is converted sheet by sheet with `calamine`; a directory supplies
//! one `<sheet>.csv` file per sheet. Either way the result is a [`SheetSet`]
//! that [`Workbook::from_sheets`] loads.

use crate::Workbook;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use gi_model::sheet::{
    ATTERBERG_SHEET, MOISTURE_SHEET, POINT_SHEET, PSD_SHEET, ROCK_SHEET, SOIL_DESCRIPTION_SHEET,
    STRATA_SHEET,
};
use gi_model::ReaderError;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

/// Sheet name to CSV text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetSet {
    sheets: BTreeMap<String, String>,
}

impl SheetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sheet: impl Into<String>, csv_text: impl Into<String>) {
        self.sheets.insert(sheet.into(), csv_text.into());
    }

    pub fn get(&self, sheet: &str) -> Option<&str> {
        self.sheets.get(sheet).map(String::as_str)
    }

    pub fn contains(&self, sheet: &str) -> bool {
        self.sheets.contains_key(sheet)
    }

    /// CSV text of `sheet`, or [`ReaderError::MissingSheet`].
    pub fn require(&self, sheet: &str) -> Result<&str, ReaderError> {
        self.get(sheet)
            .ok_or_else(|| ReaderError::MissingSheet(sheet.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Convert every worksheet of an Excel workbook (`xlsx`, `xlsm`, `xlsb`,
    /// `xls` or `ods`) held in memory.
    pub fn from_excel_bytes(bytes: &[u8]) -> Result<Self, ReaderError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| ReaderError::Spreadsheet(e.to_string()))?;

        let mut set = Self::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| ReaderError::Spreadsheet(format!("sheet '{}': {}", name, e)))?;
            set.insert(name.trim(), range_to_csv(&range)?);
        }
        log::info!(
            "[GI] sheets: read {} worksheets from Excel workbook",
            set.len()
        );
        Ok(set)
    }

    /// Read an Excel workbook from disk.
    pub fn from_excel_path(path: &Path) -> Result<Self, ReaderError> {
        Self::from_excel_bytes(&std::fs::read(path)?)
    }

    /// Read every `<sheet>.csv` file in `dir`. The file stem is the sheet name.
    pub fn from_dir(dir: &Path) -> Result<Self, ReaderError> {
        let mut set = Self::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_csv = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if !is_csv || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                set.insert(stem, std::fs::read_to_string(&path)?);
            }
        }
        log::info!(
            "[GI] sheets: read {} sheet files from {}",
            set.len(),
            dir.display()
        );
        Ok(set)
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for SheetSet {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (sheet, text) in iter {
            set.insert(sheet, text);
        }
        set
    }
}

/// Text of one cell as it would appear in a CSV export.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

/// Write a worksheet range as CSV. The first row is the header; fully empty
/// rows are dropped.
fn range_to_csv(range: &Range<Data>) -> Result<String, ReaderError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in range.rows() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        wtr.write_record(row.iter().map(cell_text))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ReaderError::Spreadsheet(e.to_string()))
}

impl Workbook {
    /// Load every recognised sheet present in `sheets`.
    ///
    /// Sheets with other names are ignored.
    pub fn load_sheets(&self, sheets: &SheetSet) -> anyhow::Result<()> {
        if let Some(text) = sheets.get(POINT_SHEET) {
            self.load_points(text)?;
        }
        if let Some(text) = sheets.get(STRATA_SHEET) {
            self.load_strata(text)?;
        }
        if let Some(text) = sheets.get(SOIL_DESCRIPTION_SHEET) {
            if !text.trim().is_empty() {
                self.load_soil_descriptions(text)?;
            }
        }
        if let Some(text) = sheets.get(MOISTURE_SHEET) {
            self.load_moisture(text)?;
        }
        if let Some(text) = sheets.get(PSD_SHEET) {
            self.load_psd(text)?;
        }
        if let Some(text) = sheets.get(ATTERBERG_SHEET) {
            self.load_atterberg(text)?;
        }
        if let Some(text) = sheets.get(ROCK_SHEET) {
            self.load_rock(text)?;
        }
        Ok(())
    }

    /// New workbook loaded from `sheets`, failing with
    /// [`ReaderError::MissingSheet`] when any of `required` is absent.
    pub fn from_sheets(sheets: &SheetSet, required: &[&str]) -> anyhow::Result<Self> {
        for sheet in required {
            sheets.require(sheet)?;
        }
        let wb = Self::new()?;
        wb.load_sheets(sheets)?;
        Ok(wb)
    }
}
