//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Bold lead-in shown before the message
    #[props(default = "Error".to_string())]
    pub title: String,
}

/// Reader and configuration errors in a styled box. Nothing is drawn
/// alongside it; the chart stays empty until the error is resolved.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.title}: " }
            "{props.message}"
        }
    }
}
