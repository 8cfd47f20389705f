//! `strata` and `units`: resolve a workbook into coloured 3D segments.

use crate::output::{open_output, write_csv, write_json, OutputFormat};
use crate::workbook::{load_workbook, STRATA_SHEETS};
use gi_model::Color;
use gi_strata::{render, StrataConfig, StrataInputs, StrataSession, StrataView};
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Parse a `UNIT=#rrggbb` colour override.
///
/// The unit name may itself contain `=`; the colour follows the last one.
pub fn parse_color_override(s: &str) -> Result<(String, Color), String> {
    let (unit, hex) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected UNIT=#rrggbb, got '{}'", s))?;
    let unit = unit.trim();
    if unit.is_empty() {
        return Err(format!("missing geology unit in '{}'", s));
    }
    let color = hex.trim().parse::<Color>().map_err(|e| e.to_string())?;
    Ok((unit.to_string(), color))
}

/// Options shared by every command that renders strata.
#[derive(Debug, Clone, Default)]
pub struct StrataOptions {
    pub config: Option<PathBuf>,
    pub no_sub_layers: bool,
    pub boreholes: Vec<String>,
    pub units: Vec<String>,
    pub colors: Vec<(String, Color)>,
}

fn build_session(options: &StrataOptions) -> anyhow::Result<StrataSession> {
    let config = match &options.config {
        Some(path) => StrataConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => StrataConfig::default(),
    };
    let mut session = StrataSession::from_config(&config)?;
    if options.no_sub_layers {
        session.sub_layers = false;
    }
    for (unit, color) in &options.colors {
        session.set_color(unit, *color);
    }
    Ok(session)
}

/// Load `workbook` and render it with the given options.
///
/// Returns the session alongside the view so callers can query the colours
/// and selections the render settled on.
pub fn resolve_workbook(
    workbook: &Path,
    options: &StrataOptions,
) -> anyhow::Result<(StrataView, StrataSession)> {
    let wb = load_workbook(workbook, &STRATA_SHEETS)?;
    let points = wb.query_points()?;
    let strata = wb.query_strata()?;
    let descriptors = wb.query_soil_descriptions()?;
    let inputs = StrataInputs {
        points: &points,
        strata: &strata,
        descriptors: &descriptors,
    };

    let mut session = build_session(options)?;
    let mut view = render(&inputs, &mut session);

    if !options.boreholes.is_empty() || !options.units.is_empty() {
        for id in &options.boreholes {
            if !session.known_boreholes().contains(id) {
                warn!("Borehole '{}' has no resolved strata", id);
            }
        }
        for unit in &options.units {
            if !session.known_units().contains(unit) {
                warn!("Geology unit '{}' has no resolved strata", unit);
            }
        }
        if !options.boreholes.is_empty() {
            session.select_only_boreholes(options.boreholes.iter().cloned());
        }
        if !options.units.is_empty() {
            session.select_only_units(options.units.iter().cloned());
        }
        view = render(&inputs, &mut session);
    }

    if view.skipped.total() > 0 {
        warn!(
            "Skipped {} strata rows: {} without a POINT row, {} with invalid depths",
            view.skipped.total(),
            view.skipped.missing_point,
            view.skipped.invalid_interval
        );
    }
    Ok((view, session))
}

pub fn strata_view(workbook: &Path, options: &StrataOptions) -> anyhow::Result<StrataView> {
    resolve_workbook(workbook, options).map(|(view, _)| view)
}

/// Run the `strata` command.
pub fn run_strata(
    workbook: &Path,
    options: &StrataOptions,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let view = strata_view(workbook, options)?;
    let out = open_output(output)?;
    match format {
        OutputFormat::Json => write_json(out, &view)?,
        OutputFormat::Csv => write_csv(out, &view.segments)?,
    }
    info!(
        "Strata complete. {} segments across {} boreholes",
        view.segments.len(),
        view.boreholes.len()
    );
    Ok(())
}

/// A row of the `units` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitColor {
    pub geology_unit: String,
    pub color: Color,
    pub overridden: bool,
}

/// Every resolved geology unit with the colour it would be drawn in.
pub fn unit_colors(workbook: &Path, options: &StrataOptions) -> anyhow::Result<Vec<UnitColor>> {
    let (view, mut session) = resolve_workbook(workbook, options)?;
    Ok(view
        .units
        .into_iter()
        .map(|geology_unit| UnitColor {
            color: session.color_for(&geology_unit),
            overridden: session.colors.is_overridden(&geology_unit),
            geology_unit,
        })
        .collect())
}

/// Run the `units` command.
pub fn run_units(
    workbook: &Path,
    options: &StrataOptions,
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let units = unit_colors(workbook, options)?;
    let out = open_output(output)?;
    match format {
        OutputFormat::Json => write_json(out, &units)?,
        OutputFormat::Csv => write_csv(out, &units)?,
    }
    Ok(())
}
