//! `boreholes` and `moisture`: plain listings straight from the workbook.

use crate::output::{open_output, write_csv, write_json, OutputFormat};
use crate::workbook::load_workbook;
use gi_db::models::BoreholeInfo;
use gi_model::sheet::{MOISTURE_SHEET, POINT_SHEET};
use gi_model::MoisturePoint;
use log::info;
use std::path::Path;

pub fn boreholes(workbook: &Path) -> anyhow::Result<Vec<BoreholeInfo>> {
    let wb = load_workbook(workbook, &[POINT_SHEET])?;
    wb.query_boreholes()
}

/// Run the `boreholes` command.
pub fn run_boreholes(
    workbook: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rows = boreholes(workbook)?;
    let out = open_output(output)?;
    match format {
        OutputFormat::Json => write_json(out, &rows)?,
        OutputFormat::Csv => write_csv(out, &rows)?,
    }
    Ok(())
}

/// Moisture samples joined to their boreholes, optionally limited to `units`.
pub fn moisture_points(workbook: &Path, units: &[String]) -> anyhow::Result<Vec<MoisturePoint>> {
    let wb = load_workbook(workbook, &[POINT_SHEET, MOISTURE_SHEET])?;
    let total = wb.query_moisture_samples()?.len();
    let mut points = wb.query_moisture_points()?;
    if total > points.len() {
        info!(
            "{} moisture samples have no matching POINT row",
            total - points.len()
        );
    }
    if !units.is_empty() {
        points.retain(|p| units.contains(&p.geology_unit));
    }
    Ok(points)
}

/// Run the `moisture` command.
pub fn run_moisture(
    workbook: &Path,
    units: &[String],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let points = moisture_points(workbook, units)?;
    let out = open_output(output)?;
    match format {
        OutputFormat::Json => write_json(out, &points)?,
        OutputFormat::Csv => write_csv(out, &points)?,
    }
    info!("Moisture complete. {} samples", points.len());
    Ok(())
}
