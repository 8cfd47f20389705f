//! Shared Dioxus components and Plotly bridge for GI chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Plotly chart scripts via `js_sys::eval()`
//! - `plot`: serializable trace payloads built from resolved segments and samples;
//!   the 2D lab charts send a `gi_lab::Figure` as is
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, pickers, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod plot;
pub mod state;
