//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module injects Plotly itself, then provides safe Rust wrappers that
//! pass JSON payloads to those globals.

use wasm_bindgen::JsValue;

// Embed the chart scripts at compile time
static STRATA_CHART_JS: &str = include_str!("../assets/js/strata-3d.js");
static MOISTURE_CHART_JS: &str = include_str!("../assets/js/moisture-3d.js");
static LAB_CHART_JS: &str = include_str!("../assets/js/lab-2d.js");

/// Plotly build loaded when the host page does not already provide one.
pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const PLOTLY_SCRIPT_ID: &str = "gi-plotly";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Encode `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Append a `<script>` tag for Plotly unless one is already on the page.
fn ensure_plotly() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(PLOTLY_SCRIPT_ID).is_some() {
        return Ok(());
    }
    let script = document.create_element("script")?;
    script.set_attribute("id", PLOTLY_SCRIPT_ID)?;
    script.set_attribute("src", PLOTLY_SRC)?;
    let head = document
        .query_selector("head")?
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&script)?;
    Ok(())
}

/// Load Plotly and the chart scripts. Later calls are no-ops.
///
/// The chart scripts are evaluated at global scope once `Plotly` exists,
/// then each entry point is promoted to `window.*`.
pub fn init_charts() {
    let ready = js_sys::eval("window.__giChartsReady === true")
        .map(|v| v.is_truthy())
        .unwrap_or(false);
    if ready {
        return;
    }
    let already_loaded = js_sys::eval("typeof Plotly !== 'undefined'")
        .map(|v| v.is_truthy())
        .unwrap_or(false);
    if !already_loaded {
        if let Err(e) = ensure_plotly() {
            log::warn!("[GI] js_bridge: could not inject Plotly: {:?}", e);
        }
    }

    let all_js = [STRATA_CHART_JS, MOISTURE_CHART_JS, LAB_CHART_JS].join("\n");
    let store_js = format!("window.__giChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__giChartScripts);
                    delete window.__giChartScripts;
                    if (typeof renderStrataChart !== 'undefined') window.renderStrataChart = renderStrataChart;
                    if (typeof renderMoistureChart !== 'undefined') window.renderMoistureChart = renderMoistureChart;
                    if (typeof renderLabChart !== 'undefined') window.renderLabChart = renderLabChart;
                    if (typeof destroyGiChart !== 'undefined') window.destroyGiChart = destroyGiChart;
                    window.__giChartsReady = true;
                    console.log('GI charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container, data, config)` once the chart scripts
/// and the container element are ready.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let container = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__giChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container}, {data}, {config});
                    }} catch(e) {{ console.error('[GI] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the 3D strata chart from a JSON array of [`crate::plot::StrataTrace`].
pub fn render_strata_chart(container_id: &str, traces_json: &str, config_json: &str) {
    render_when_ready("renderStrataChart", container_id, traces_json, config_json);
}

/// Render the 3D moisture heatmap from a [`crate::plot::MoistureTrace`].
pub fn render_moisture_chart(container_id: &str, trace_json: &str, config_json: &str) {
    render_when_ready("renderMoistureChart", container_id, trace_json, config_json);
}

/// Render one 2D lab chart from a JSON [`gi_lab::Figure`].
pub fn render_lab_chart(container_id: &str, figure_json: &str) {
    render_when_ready("renderLabChart", container_id, figure_json, "{}");
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let container = js_string(container_id);
    call_js(&format!(
        "if (window.destroyGiChart) {{ window.destroyGiChart({c}); }} \
         else {{ var el = document.getElementById({c}); if (el) el.innerHTML = ''; }}",
        c = container
    ));
}
