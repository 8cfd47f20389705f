//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The selectors and pickers only ever write to `session`; each app's render
//! effect reads it, so any change redraws the chart.

use gi_db::{SheetSet, Workbook};
use gi_strata::{SkipCounts, StrataConfig, StrataSession};
use dioxus::prelude::*;

/// A workbook chosen through [`crate::components::WorkbookUpload`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedWorkbook {
    /// File name as reported by the browser
    pub name: String,
    pub sheets: SheetSet,
}

/// Shared application state for all GI chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded workbook (None until loaded)
    pub workbook: Signal<Option<Workbook>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Colour overrides plus borehole/unit selections
    pub session: Signal<StrataSession>,
    /// Render configuration
    pub config: Signal<StrataConfig>,
    /// Rows left out of the last render
    pub skipped: Signal<SkipCounts>,
    /// Uploaded workbook replacing the bundled one (None shows the bundled sheets)
    pub uploaded: Signal<Option<UploadedWorkbook>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(StrataConfig::default())
    }

    /// AppState for a given configuration.
    ///
    /// A palette that fails to parse falls back to the default session and
    /// is reported through `error_msg`.
    pub fn with_config(config: StrataConfig) -> Self {
        let (session, error) = match StrataSession::from_config(&config) {
            Ok(session) => (session, None),
            Err(e) => (
                StrataSession::default(),
                Some(format!("Invalid palette in configuration: {}", e)),
            ),
        };
        Self {
            workbook: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(error),
            session: Signal::new(session),
            config: Signal::new(config),
            skipped: Signal::new(SkipCounts::default()),
            uploaded: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
