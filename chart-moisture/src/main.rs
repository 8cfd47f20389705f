//! 3D Moisture Content Heatmap
//!
//! Plots each lab moisture result at its borehole's easting/northing and the
//! sample elevation reported by the lab, coloured by moisture content.
//! Samples can be narrowed to the geology units they were taken from, and an
//! uploaded Excel workbook replaces the bundled example.

use gi_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, UnitFilter, WorkbookUpload,
};
use gi_chart_ui::js_bridge;
use gi_chart_ui::plot::{moisture_trace, ChartConfig};
use gi_chart_ui::state::AppState;
use gi_db::{SheetSet, Workbook};
use gi_model::sheet::{MOISTURE_SHEET, POINT_SHEET};
use gi_model::MoisturePoint;
use dioxus::prelude::*;
use std::collections::BTreeSet;

const POINT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/POINT.csv"));
const MOISTURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/moisture_content.csv"));

const CHART_CONTAINER_ID: &str = "moisture-3d-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("moisture-root"))
        .launch(App);
}

fn bundled_sheets() -> SheetSet {
    SheetSet::from_iter([(POINT_SHEET, POINT_CSV), (MOISTURE_SHEET, MOISTURE_CSV)])
}

fn load_samples(sheets: &SheetSet) -> anyhow::Result<Vec<MoisturePoint>> {
    let wb = Workbook::from_sheets(sheets, &[POINT_SHEET, MOISTURE_SHEET])?;
    wb.query_moisture_points()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut samples: Signal<Vec<MoisturePoint>> = use_signal(Vec::new);

    // ─── Effect 1: Load and join the samples, again after each upload ───
    use_effect(move || {
        let uploaded = state.uploaded.read().clone();
        let sheets = match &uploaded {
            Some(upload) => {
                state.error_msg.set(None);
                upload.sheets.clone()
            }
            None => bundled_sheets(),
        };
        let data = match load_samples(&sheets) {
            Ok(data) => data,
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to read workbook: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        if data.is_empty() {
            state
                .error_msg
                .set(Some("No moisture samples matched a borehole in POINT.".to_string()));
            state.loading.set(false);
            return;
        }

        let boreholes: BTreeSet<String> = data.iter().map(|p| p.point_id.clone()).collect();
        let units: BTreeSet<String> = data.iter().map(|p| p.geology_unit.clone()).collect();
        let mut session = state.session.peek().clone();
        if uploaded.is_some() {
            session.forget_data();
        }
        session.observe(boreholes, units);
        state.session.set(session);

        samples.set(data);
        state.loading.set(false);
        js_bridge::init_charts();
    });

    // ─── Effect 2: Filter by unit and render ───
    use_effect(move || {
        if (state.loading)() || state.error_msg.peek().is_some() {
            return;
        }
        let data = samples.read().clone();
        let session = state.session.read().clone();

        let visible: Vec<&MoisturePoint> = data
            .iter()
            .filter(|p| session.is_unit_selected(&p.geology_unit))
            .collect();
        if visible.is_empty() {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }

        let trace_json = serde_json::to_string(&moisture_trace(visible.iter().copied()))
            .unwrap_or_default();
        let config_json = serde_json::to_string(&ChartConfig::moisture()).unwrap_or_default();
        log::info!("[GI] chart-moisture: rendering {} samples", visible.len());
        js_bridge::render_moisture_chart(CHART_CONTAINER_ID, &trace_json, &config_json);
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "3D Moisture Content Heatmap".to_string(),
                source: "POINT and Moisture Content sheets".to_string(),
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
                        style: "flex: 0 0 240px;",
                        UnitFilter {}
                    }
                    div {
                        style: "flex: 1 1 auto; min-width: 0;",
                        ChartContainer {
                            id: CHART_CONTAINER_ID.to_string(),
                            loading: *state.loading.read(),
                        }
                    }
                }
            }
        }
    }
}
