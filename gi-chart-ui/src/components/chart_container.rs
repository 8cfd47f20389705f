//! Chart container component with loading state.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Plotly renders into this)
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    /// Height in pixels; Plotly needs a fixed height to size the plot
    #[props(default = 600)]
    pub height: u32,
}

/// A container div for a Plotly chart with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%; border: 1px solid #e0e0e0; border-radius: 4px;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Preparing chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
