//! Colour input per geology unit. Picks become session overrides.

use crate::state::AppState;
use dioxus::prelude::*;
use gi_model::Color;

#[component]
pub fn UnitColorPicker() -> Element {
    let state = use_context::<AppState>();
    let rows: Vec<(String, String, bool)> = {
        let session = state.session.read();
        session
            .known_units()
            .iter()
            .map(|unit| {
                let color = session.colors.peek(unit).unwrap_or(Color::UNASSIGNED);
                (unit.clone(), color.to_hex(), session.colors.is_overridden(unit))
            })
            .collect()
    };

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 4px;",
            legend { style: "font-weight: bold;", "Unit Colours" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 4px 12px;",
                for (unit, hex, overridden) in rows {
                    UnitColorRow {
                        key: "{unit}",
                        unit: unit.clone(),
                        hex: hex,
                        overridden: overridden,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UnitColorRowProps {
    unit: String,
    hex: String,
    overridden: bool,
}

#[component]
fn UnitColorRow(props: UnitColorRowProps) -> Element {
    let mut state = use_context::<AppState>();
    let unit = props.unit.clone();
    let reset_unit = props.unit.clone();

    let on_input = move |evt: Event<FormData>| match evt.value().parse::<Color>() {
        Ok(color) => state.session.write().set_color(&unit, color),
        Err(e) => log::warn!("[GI] colour picker: {}", e),
    };

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px;",
            input {
                r#type: "color",
                value: "{props.hex}",
                oninput: on_input,
            }
            "{props.unit}"
            if props.overridden {
                button {
                    title: "Revert to the default colour",
                    style: "font-size: 11px; padding: 0 4px;",
                    onclick: move |_| {
                        state.session.write().colors.clear_override(&reset_unit);
                    },
                    "reset"
                }
            }
        }
    }
}
