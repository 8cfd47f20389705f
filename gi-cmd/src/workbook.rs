//! Opening a workbook, either an Excel file or a directory with one CSV file
//! per sheet, into a [`Workbook`].

use gi_db::{SheetSet, Workbook};
use gi_model::sheet::{POINT_SHEET, STRATA_SHEET};
use log::info;
use std::path::Path;

/// Sheets every strata command needs.
pub const STRATA_SHEETS: [&str; 2] = [POINT_SHEET, STRATA_SHEET];

const EXCEL_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Read the sheets of `path`: a directory of `<sheet>.csv` files or an
/// Excel workbook.
pub fn open_sheets(path: &Path) -> anyhow::Result<SheetSet> {
    if path.is_dir() {
        return Ok(SheetSet::from_dir(path)?);
    }
    if !path.is_file() {
        anyhow::bail!("Workbook {} not found", path.display());
    }
    let is_excel = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXCEL_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)));
    if !is_excel {
        anyhow::bail!(
            "Unsupported workbook {}: expected a directory or one of .{}",
            path.display(),
            EXCEL_EXTENSIONS.join(", .")
        );
    }
    Ok(SheetSet::from_excel_path(path)?)
}

/// Load every recognised sheet of `path`, failing with
/// [`gi_model::ReaderError::MissingSheet`] when one of `required` is absent.
pub fn load_workbook(path: &Path, required: &[&str]) -> anyhow::Result<Workbook> {
    let sheets = open_sheets(path)?;
    let wb = Workbook::from_sheets(&sheets, required)?;

    let counts = wb.query_sheet_counts()?;
    info!(
        "Loaded workbook {}: {} points, {} strata rows ({} sub-layers), {} descriptions, {} moisture, {} PSD, {} Atterberg, {} rock",
        path.display(),
        counts.points,
        counts.strata,
        counts.sub_layers,
        counts.soil_descriptions,
        counts.moisture,
        counts.psd,
        counts.atterberg,
        counts.rock
    );
    Ok(wb)
}

#[cfg(test)]
pub(crate) fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gi_model::ReaderError;

    #[test]
    fn loads_fixture_workbook() {
        let wb = load_workbook(&fixtures_dir(), &STRATA_SHEETS).unwrap();
        let counts = wb.query_sheet_counts().unwrap();
        assert_eq!(counts.points, 5);
        assert_eq!(counts.strata, 21);
        assert_eq!(counts.sub_layers, 2);
        assert_eq!(counts.soil_descriptions, 4);
        assert_eq!(counts.moisture, 5);
        assert_eq!(counts.psd, 5);
        assert_eq!(counts.atterberg, 4);
        assert_eq!(counts.rock, 4);
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = open_sheets(Path::new("/nonexistent/gi-workbook")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn missing_required_sheet_names_the_sheet() {
        let err = match load_workbook(&fixtures_dir(), &["LAB_SUMMARY"]) {
            Err(e) => e,
            Ok(_) => panic!("fixtures have no LAB_SUMMARY sheet"),
        };
        assert!(matches!(
            err.downcast_ref::<ReaderError>(),
            Some(ReaderError::MissingSheet(s)) if s == "LAB_SUMMARY"
        ));
        assert_eq!(err.to_string(), "Missing sheet 'LAB_SUMMARY'");
    }

    #[test]
    fn other_files_are_rejected() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let err = open_sheets(&manifest).unwrap_err();
        assert!(err.to_string().starts_with("Unsupported workbook"));
    }
}
