//! 3D Geological Strata Viewer
//!
//! Draws every logged interval of a geotechnical investigation workbook as a
//! coloured vertical line at its borehole's easting/northing, spanning the
//! elevations the interval occupies.
//!
//! Data flow:
//! 1. `build.rs` copies the `POINT`, `STRATA_MAIN` and `SOIL_DESCRIPTION`
//!    sheets into OUT_DIR and `include_str!` embeds them.
//! 2. On mount, and again whenever an Excel workbook is uploaded: load the
//!    sheets into an in-memory workbook and register the boreholes and units
//!    with the session.
//! 3. On any session change (selection, colour, sub-layer toggle): resolve,
//!    colour and filter the strata, then re-render via Plotly.

use gi_chart_ui::components::{
    BoreholeSelector, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SkipNotice,
    SubLayerToggle, UnitColorPicker, UnitFilter, WorkbookUpload,
};
use gi_chart_ui::js_bridge;
use gi_chart_ui::plot::{strata_traces, ChartConfig};
use gi_chart_ui::state::AppState;
use gi_db::{SheetSet, Workbook};
use gi_model::sheet::{POINT_SHEET, SOIL_DESCRIPTION_SHEET, STRATA_SHEET};
use gi_strata::{render, StrataInputs};
use dioxus::prelude::*;

const POINT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/POINT.csv"));
const STRATA_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/STRATA_MAIN.csv"));
const SOIL_DESCRIPTION_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/SOIL_DESCRIPTION.csv"));

/// DOM id for the Plotly chart container div.
const CHART_CONTAINER_ID: &str = "strata-3d-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("strata-root"))
        .launch(App);
}

/// The example sheets shown until a workbook is uploaded.
fn bundled_sheets() -> SheetSet {
    SheetSet::from_iter([
        (POINT_SHEET, POINT_CSV),
        (STRATA_SHEET, STRATA_CSV),
        (SOIL_DESCRIPTION_SHEET, SOIL_DESCRIPTION_CSV),
    ])
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the bundled workbook, then each upload ───
    use_effect(move || {
        let uploaded = state.uploaded.read().clone();
        let sheets = match &uploaded {
            Some(upload) => {
                state.error_msg.set(None);
                upload.sheets.clone()
            }
            None => bundled_sheets(),
        };
        let wb = match Workbook::from_sheets(&sheets, &[POINT_SHEET, STRATA_SHEET]) {
            Ok(wb) => wb,
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to read workbook: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        // Resolve with and without sub-layers so the session learns every
        // borehole and unit the toggle can reveal before the first draw.
        let mut session = state.session.peek().clone();
        if uploaded.is_some() {
            session.forget_data();
        }
        match (wb.query_points(), wb.query_strata()) {
            (Ok(points), Ok(strata)) => {
                let inputs = StrataInputs {
                    points: &points,
                    strata: &strata,
                    descriptors: &[],
                };
                let sub_layers = session.sub_layers;
                for flag in [true, false] {
                    session.sub_layers = flag;
                    render(&inputs, &mut session);
                }
                session.sub_layers = sub_layers;
            }
            (Err(e), _) | (_, Err(e)) => {
                state.error_msg.set(Some(format!("Failed to query workbook: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        state.session.set(session);
        state.workbook.set(Some(wb));
        state.loading.set(false);

        js_bridge::init_charts();
    });

    // ─── Effect 2: Resolve and render ───
    // Re-runs whenever loading, the workbook, the session or the config change.
    use_effect(move || {
        if (state.loading)() || state.error_msg.peek().is_some() {
            return;
        }
        let wb = match state.workbook.read().clone() {
            Some(wb) => wb,
            None => return,
        };
        let mut session = state.session.read().clone();
        let config = state.config.read().clone();

        let rows = wb
            .query_points()
            .and_then(|p| Ok((p, wb.query_strata()?, wb.query_soil_descriptions()?)));
        let (points, strata, descriptors) = match rows {
            Ok(rows) => rows,
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to query workbook: {}", e)));
                return;
            }
        };

        let view = render(
            &StrataInputs {
                points: &points,
                strata: &strata,
                descriptors: &descriptors,
            },
            &mut session,
        );
        state.skipped.set(view.skipped);

        if view.segments.is_empty() {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }

        let traces_json = serde_json::to_string(&strata_traces(&view.segments)).unwrap_or_default();
        let config_json = serde_json::to_string(&ChartConfig::strata(&config)).unwrap_or_default();
        log::info!(
            "[GI] chart-strata: rendering {} segments, {} legend entries",
            view.segments.len(),
            view.legend.len()
        );
        js_bridge::render_strata_chart(CHART_CONTAINER_ID, &traces_json, &config_json);
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Interactive 3D Borehole Stratigraphy".to_string(),
                source: "POINT, STRATA_MAIN and SOIL_DESCRIPTION sheets".to_string(),
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
                        style: "flex: 0 0 280px;",
                        SubLayerToggle {}
                        BoreholeSelector {}
                        UnitFilter {}
                        UnitColorPicker {}
                    }
                    div {
                        style: "flex: 1 1 auto; min-width: 0;",
                        SkipNotice {}
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
