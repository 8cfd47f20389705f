//! Toggle for sub-layer precedence.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SubLayerToggle() -> Element {
    let mut state = use_context::<AppState>();
    let enabled = state.session.read().sub_layers;

    rsx! {
        label {
            style: "display: block; margin: 8px 0;",
            input {
                r#type: "checkbox",
                checked: enabled,
                onchange: move |evt: Event<FormData>| state.session.write().sub_layers = evt.checked(),
            }
            " Use sub-layers where logged"
        }
    }
}
