//! Reusable Dioxus RSX components for GI chart apps.

mod borehole_selector;
mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod psd_table;
mod skip_notice;
mod sub_layer_toggle;
mod unit_color_picker;
mod unit_filter;
mod workbook_upload;

pub use borehole_selector::BoreholeSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use psd_table::PsdTable;
pub use skip_notice::SkipNotice;
pub use sub_layer_toggle::SubLayerToggle;
pub use unit_color_picker::UnitColorPicker;
pub use unit_filter::UnitFilter;
pub use workbook_upload::WorkbookUpload;
