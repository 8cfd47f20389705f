//! Chart header component with title and a line about the data source.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Workbook or sheet the chart is drawn from
    #[props(default = String::new())]
    pub source: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.source.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Source: {props.source}"
                }
            }
        }
    }
}
