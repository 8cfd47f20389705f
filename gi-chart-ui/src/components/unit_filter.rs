//! Per-unit visibility checkboxes.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct UnitFilterProps {
    /// Units to list; every known unit when `None`
    pub units: Option<Vec<String>>,
}

#[component]
pub fn UnitFilter(props: UnitFilterProps) -> Element {
    let mut state = use_context::<AppState>();
    let (units, selected) = {
        let session = state.session.read();
        (
            props
                .units
                .clone()
                .unwrap_or_else(|| session.known_units().iter().cloned().collect()),
            session.selected_units().clone(),
        )
    };

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 4px;",
            legend { style: "font-weight: bold;", "Geology Units" }
            div {
                style: "margin-bottom: 4px; display: flex; gap: 8px;",
                button { onclick: move |_| state.session.write().select_all_units(true), "All" }
                button { onclick: move |_| state.session.write().select_all_units(false), "None" }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px 12px;",
                for unit in units {
                    UnitCheckbox {
                        key: "{unit}",
                        checked: selected.contains(&unit),
                        unit: unit.clone(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UnitCheckboxProps {
    unit: String,
    checked: bool,
}

#[component]
fn UnitCheckbox(props: UnitCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let unit = props.unit.clone();

    let on_change = move |evt: Event<FormData>| {
        state.session.write().set_unit(&unit, evt.checked());
    };

    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            " {props.unit}"
        }
    }
}
