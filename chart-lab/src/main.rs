//! Lab Result Charts
//!
//! Particle size distribution curves, the Casagrande plasticity chart,
//! moisture content profiles and rock strength profiles for the geology units
//! picked in the sidebar.
//!
//! Data flow:
//! 1. `build.rs` copies the `PSD`, `Atterberg Limits`, `Moisture Content` and
//!    `Rock Results` sheets into OUT_DIR and `include_str!` embeds them.
//! 2. On mount, and again whenever an Excel workbook is uploaded: load the
//!    lab sheets and register their geology units with the session.
//! 3. On any change of chart, unit selection or factor: rebuild the figures
//!    and render one Plotly chart per figure.

use gi_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PsdTable, UnitFilter,
    WorkbookUpload,
};
use gi_chart_ui::js_bridge;
use gi_chart_ui::state::AppState;
use gi_db::{SheetSet, Workbook};
use gi_lab::psd::{psd_contents, PsdContents};
use gi_lab::strength::UnitFactors;
use gi_lab::{Figure, LabChart, LabData};
use gi_model::sheet::{ATTERBERG_SHEET, MOISTURE_SHEET, PSD_SHEET, ROCK_SHEET};
use dioxus::prelude::*;

const PSD_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/psd.csv"));
const ATTERBERG_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/atterberg_limits.csv"));
const MOISTURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/moisture_content.csv"));
const ROCK_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/rock_results.csv"));

const CHART_HEIGHT: u32 = 500;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("lab-root"))
        .launch(App);
}

fn bundled_sheets() -> SheetSet {
    SheetSet::from_iter([
        (PSD_SHEET, PSD_CSV),
        (ATTERBERG_SHEET, ATTERBERG_CSV),
        (MOISTURE_SHEET, MOISTURE_CSV),
        (ROCK_SHEET, ROCK_CSV),
    ])
}

fn load_lab(sheets: &SheetSet) -> anyhow::Result<LabData> {
    let wb = Workbook::from_sheets(sheets, &[])?;
    Ok(LabData {
        psd: wb.query_psd_samples()?,
        atterberg: wb.query_atterberg()?,
        moisture: wb.query_moisture_samples()?,
        rock: wb.query_rock()?,
    })
}

fn container_id(index: usize) -> String {
    format!("lab-chart-{}", index)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut lab: Signal<LabData> = use_signal(LabData::default);
    let chart = use_signal(|| LabChart::Psd);
    let factors: Signal<UnitFactors> = use_signal(UnitFactors::default);

    // ─── Effect 1: Load the bundled lab sheets, then each upload ───
    use_effect(move || {
        let uploaded = state.uploaded.read().clone();
        let sheets = match &uploaded {
            Some(upload) => {
                state.error_msg.set(None);
                upload.sheets.clone()
            }
            None => bundled_sheets(),
        };
        let data = match load_lab(&sheets) {
            Ok(data) => data,
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to read workbook: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        let units = data.all_units();
        if units.is_empty() {
            state.error_msg.set(Some(format!(
                "No lab results found. Expected a {}, {}, {} or {} sheet.",
                PSD_SHEET, ATTERBERG_SHEET, MOISTURE_SHEET, ROCK_SHEET
            )));
            state.loading.set(false);
            return;
        }

        let mut session = state.session.peek().clone();
        if uploaded.is_some() {
            session.forget_data();
        }
        session.observe(Vec::new(), units);
        state.session.set(session);

        log::info!(
            "[GI] chart-lab: {} PSD, {} Atterberg, {} moisture, {} rock rows",
            data.psd.len(),
            data.atterberg.len(),
            data.moisture.len(),
            data.rock.len()
        );
        lab.set(data);
        state.loading.set(false);
        js_bridge::init_charts();
    });

    // Units of the current chart that are ticked in the sidebar.
    let chart_units = use_memo(move || {
        let session = state.session.read();
        lab.read()
            .units(chart())
            .into_iter()
            .filter(|u| session.is_unit_selected(u))
            .collect::<Vec<String>>()
    });

    let figures = use_memo(move || {
        lab.read()
            .figures(chart(), &chart_units.read(), &factors.read())
    });

    // ─── Effect 2: Render one chart per figure ───
    use_effect(move || {
        if (state.loading)() || state.error_msg.peek().is_some() {
            return;
        }
        let figures: Vec<Figure> = figures.read().clone();
        for (i, figure) in figures.iter().enumerate() {
            let figure_json = serde_json::to_string(figure).unwrap_or_default();
            js_bridge::render_lab_chart(&container_id(i), &figure_json);
        }
        log::info!(
            "[GI] chart-lab: rendering {} {} charts",
            figures.len(),
            chart.peek().label()
        );
    });

    let psd_rows: Vec<PsdContents> = if chart() == LabChart::Psd {
        let units = chart_units.read();
        lab.read()
            .psd
            .iter()
            .filter(|s| units.contains(&s.geology_unit))
            .map(psd_contents)
            .collect()
    } else {
        Vec::new()
    };
    let figure_count = figures.read().len();
    let available_units = lab.read().units(chart());
    let chart_label = chart().label();

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Lab Result Charts".to_string(),
                source: "PSD, Atterberg Limits, Moisture Content and Rock Results sheets".to_string(),
            }

            WorkbookUpload {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), title: "Workbook error".to_string() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 0 0 260px;",
                        ChartPicker { chart }
                        UnitFilter { units: available_units.clone() }
                        if chart() == LabChart::Factored {
                            FactorInputs { units: available_units.clone(), factors }
                        }
                    }
                    div {
                        style: "flex: 1 1 auto; min-width: 0;",
                        if figure_count == 0 {
                            p { style: "color: #666;", "No {chart_label} results for the selected units." }
                        }
                        for i in 0..figure_count {
                            div {
                                key: "{i}",
                                style: "margin-bottom: 16px;",
                                ChartContainer { id: container_id(i), height: CHART_HEIGHT }
                            }
                        }
                        PsdTable { rows: psd_rows }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartPicker(mut chart: Signal<LabChart>) -> Element {
    let current = chart();
    rsx! {
        label {
            style: "display: block; margin: 8px 0; font-weight: bold;",
            "Chart "
            select {
                onchange: move |evt: Event<FormData>| {
                    if let Some(picked) = LabChart::from_label(&evt.value()) {
                        chart.set(picked);
                    }
                },
                for kind in LabChart::ALL {
                    option {
                        key: "{kind.label()}",
                        value: kind.label(),
                        selected: kind == current,
                        {kind.label()}
                    }
                }
            }
        }
    }
}

/// PLI-to-UCS factor per unit for the factored chart.
#[component]
fn FactorInputs(units: Vec<String>, factors: Signal<UnitFactors>) -> Element {
    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 4px;",
            legend { style: "font-weight: bold;", "PLI factor" }
            for unit in units {
                FactorInput { key: "{unit}", unit: unit.clone(), factors }
            }
        }
    }
}

#[component]
fn FactorInput(unit: String, mut factors: Signal<UnitFactors>) -> Element {
    let value = factors.read().get(&unit);
    let name = unit.clone();
    rsx! {
        label {
            style: "display: flex; justify-content: space-between; gap: 8px; margin: 2px 0;",
            "{unit}"
            input {
                r#type: "number",
                min: "0.1",
                step: "0.5",
                style: "width: 64px;",
                value: "{value}",
                onchange: move |evt: Event<FormData>| {
                    match evt.value().trim().parse::<f64>() {
                        Ok(f) if f.is_finite() && f > 0.0 => factors.write().set(name.clone(), f),
                        _ => log::warn!("[GI] chart-lab: ignoring factor '{}' for {}", evt.value(), name),
                    }
                },
            }
        }
    }
}
