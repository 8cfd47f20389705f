//! Borehole visibility checkboxes with a "Select All" toggle.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn BoreholeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let (boreholes, selected, all_selected) = {
        let session = state.session.read();
        (
            session.known_boreholes().iter().cloned().collect::<Vec<_>>(),
            session.selected_boreholes().clone(),
            session.all_boreholes_selected(),
        )
    };

    let on_select_all = move |evt: Event<FormData>| {
        state.session.write().select_all_boreholes(evt.checked());
    };

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 4px;",
            legend { style: "font-weight: bold;", "Boreholes" }
            label {
                style: "display: block; margin-bottom: 4px;",
                input {
                    r#type: "checkbox",
                    checked: all_selected,
                    onchange: on_select_all,
                }
                " Select All Boreholes"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px 12px; max-height: 160px; overflow-y: auto;",
                for id in boreholes {
                    BoreholeCheckbox {
                        key: "{id}",
                        checked: selected.contains(&id),
                        point_id: id.clone(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BoreholeCheckboxProps {
    point_id: String,
    checked: bool,
}

#[component]
fn BoreholeCheckbox(props: BoreholeCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let point_id = props.point_id.clone();

    let on_change = move |evt: Event<FormData>| {
        state.session.write().set_borehole(&point_id, evt.checked());
    };

    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            " {props.point_id}"
        }
    }
}
