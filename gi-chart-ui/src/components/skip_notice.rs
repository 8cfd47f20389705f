//! Notice listing strata rows the last render left out.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SkipNotice() -> Element {
    let state = use_context::<AppState>();
    let skipped = (state.skipped)();
    let total = skipped.total();

    rsx! {
        if total > 0 {
            div {
                style: "padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082; font-size: 13px;",
                "{total} strata rows not drawn: "
                "{skipped.missing_point} without a POINT row, "
                "{skipped.invalid_interval} with invalid depths."
            }
        }
    }
}
