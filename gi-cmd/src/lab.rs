//! `psd`, `plasticity`, `rock` and `figure`: lab sheet listings and charts.

use crate::output::{open_output, write_csv, write_json, OutputFormat};
use crate::workbook::load_workbook;
use clap::ValueEnum;
use gi_lab::plasticity::ClassifiedResult;
use gi_lab::psd::{psd_contents, PsdContents};
use gi_lab::strength::{strength_rows, StrengthRow, UnitFactors};
use gi_lab::{Figure, LabChart, LabData};
use gi_model::sheet::{ATTERBERG_SHEET, PSD_SHEET, ROCK_SHEET};
use log::{info, warn};
use std::path::Path;

/// Lab chart names accepted by `figure --chart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Particle size distribution curves, one chart per unit
    Psd,
    /// Casagrande plasticity chart of every selected unit
    Plasticity,
    /// Moisture content against elevation, one chart per unit
    Moisture,
    /// Point load index against elevation
    Is50,
    /// UCS against elevation
    Ucs,
    /// Factored point load index with UCS
    Factored,
}

impl From<ChartKind> for LabChart {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Psd => LabChart::Psd,
            ChartKind::Plasticity => LabChart::Plasticity,
            ChartKind::Moisture => LabChart::Moisture,
            ChartKind::Is50 => LabChart::Is50,
            ChartKind::Ucs => LabChart::Ucs,
            ChartKind::Factored => LabChart::Factored,
        }
    }
}

/// Parse a `UNIT=FACTOR` PLI-to-UCS factor.
pub fn parse_unit_factor(s: &str) -> Result<(String, f64), String> {
    let (unit, factor) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected UNIT=FACTOR, got '{}'", s))?;
    let unit = unit.trim();
    if unit.is_empty() {
        return Err(format!("missing geology unit in '{}'", s));
    }
    let factor: f64 = factor
        .trim()
        .parse()
        .map_err(|_| format!("invalid factor in '{}'", s))?;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(format!("factor must be positive in '{}'", s));
    }
    Ok((unit.to_string(), factor))
}

/// Every lab sheet of `workbook`, with `required` checked first.
pub fn lab_data(workbook: &Path, required: &[&str]) -> anyhow::Result<LabData> {
    let wb = load_workbook(workbook, required)?;
    Ok(LabData {
        psd: wb.query_psd_samples()?,
        atterberg: wb.query_atterberg()?,
        moisture: wb.query_moisture_samples()?,
        rock: wb.query_rock()?,
    })
}

fn keep_units<T>(rows: &mut Vec<T>, units: &[String], unit_of: impl Fn(&T) -> &str) {
    if !units.is_empty() {
        rows.retain(|r| units.iter().any(|u| u == unit_of(r)));
    }
}

pub fn psd_table(workbook: &Path, units: &[String]) -> anyhow::Result<Vec<PsdContents>> {
    let data = lab_data(workbook, &[PSD_SHEET])?;
    let mut rows: Vec<PsdContents> = data.psd.iter().map(psd_contents).collect();
    keep_units(&mut rows, units, |r| r.geology_unit.as_str());
    let incomplete = rows.iter().filter(|r| r.fines.is_none()).count();
    if incomplete > 0 {
        warn!(
            "{} PSD samples miss the 2.36 or 0.075 mm sieve; their contents are blank",
            incomplete
        );
    }
    Ok(rows)
}

pub fn plasticity_table(
    workbook: &Path,
    units: &[String],
) -> anyhow::Result<Vec<ClassifiedResult>> {
    let data = lab_data(workbook, &[ATTERBERG_SHEET])?;
    let mut rows: Vec<ClassifiedResult> = data.atterberg.iter().map(Into::into).collect();
    keep_units(&mut rows, units, |r| r.geology_unit.as_str());
    Ok(rows)
}

pub fn rock_table(
    workbook: &Path,
    units: &[String],
    factors: &UnitFactors,
) -> anyhow::Result<Vec<StrengthRow>> {
    let data = lab_data(workbook, &[ROCK_SHEET])?;
    let mut rows = strength_rows(&data.rock, factors);
    keep_units(&mut rows, units, |r| r.geology_unit.as_str());
    Ok(rows)
}

/// Figures of `chart` for `units`, or for every unit with data when `units`
/// is empty.
pub fn lab_figures(
    workbook: &Path,
    chart: LabChart,
    units: &[String],
    factors: &UnitFactors,
) -> anyhow::Result<Vec<Figure>> {
    let data = lab_data(workbook, &[chart.sheet()])?;
    let available = data.units(chart);
    let units: Vec<String> = if units.is_empty() {
        available
    } else {
        for unit in units {
            if !available.contains(unit) {
                warn!("Geology unit '{}' has no {} data", unit, chart.label());
            }
        }
        units.to_vec()
    };
    Ok(data.figures(chart, &units, factors))
}

fn write_rows<T: serde::Serialize>(
    rows: &[T],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let out = open_output(output)?;
    match format {
        OutputFormat::Json => write_json(out, rows),
        OutputFormat::Csv => write_csv(out, rows),
    }
}

/// Run the `psd` command.
pub fn run_psd(
    workbook: &Path,
    units: &[String],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rows = psd_table(workbook, units)?;
    write_rows(&rows, format, output)?;
    info!("PSD complete. {} samples", rows.len());
    Ok(())
}

/// Run the `plasticity` command.
pub fn run_plasticity(
    workbook: &Path,
    units: &[String],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rows = plasticity_table(workbook, units)?;
    write_rows(&rows, format, output)?;
    info!("Plasticity complete. {} results", rows.len());
    Ok(())
}

/// Run the `rock` command.
pub fn run_rock(
    workbook: &Path,
    units: &[String],
    factors: &UnitFactors,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rows = rock_table(workbook, units, factors)?;
    write_rows(&rows, format, output)?;
    info!("Rock complete. {} results", rows.len());
    Ok(())
}

/// Run the `figure` command. Figures are always JSON.
pub fn run_figure(
    workbook: &Path,
    chart: LabChart,
    units: &[String],
    factors: &UnitFactors,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let figures = lab_figures(workbook, chart, units, factors)?;
    write_json(open_output(output)?, &figures)?;
    info!("{} complete. {} figures", chart.label(), figures.len());
    Ok(())
}
