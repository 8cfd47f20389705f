//! Gravel, sand and fines table under the PSD charts.

use dioxus::prelude::*;
use gi_lab::psd::{format_percent, PsdContents};
use gi_model::format_value;

#[derive(Props, Clone, PartialEq)]
pub struct PsdTableProps {
    pub rows: Vec<PsdContents>,
}

#[component]
pub fn PsdTable(props: PsdTableProps) -> Element {
    if props.rows.is_empty() {
        return rsx! {};
    }
    let cell = "padding: 2px 8px; border-bottom: 1px solid #eee; text-align: right;";
    let head = "padding: 2px 8px; border-bottom: 2px solid #ccc; text-align: right;";

    rsx! {
        table {
            style: "margin-top: 12px; border-collapse: collapse; font-size: 13px;",
            thead {
                tr {
                    th { style: "{head}", "ID" }
                    th { style: "{head}", "From (m)" }
                    th { style: "{head}", "To (m)" }
                    th { style: "{head}", "Geology Unit" }
                    th { style: "{head}", "Gravel (%)" }
                    th { style: "{head}", "Sand (%)" }
                    th { style: "{head}", "Fines (%)" }
                }
            }
            tbody {
                for (i, row) in props.rows.iter().enumerate() {
                    tr {
                        key: "{i}",
                        td { style: "{cell}", "{row.id}" }
                        td { style: "{cell}", {format_value(row.from)} }
                        td { style: "{cell}", {format_value(row.to)} }
                        td { style: "{cell}", "{row.geology_unit}" }
                        td { style: "{cell}", {format_percent(row.gravel)} }
                        td { style: "{cell}", {format_percent(row.sand)} }
                        td { style: "{cell}", {format_percent(row.fines)} }
                    }
                }
            }
        }
    }
}
