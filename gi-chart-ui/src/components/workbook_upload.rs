//! File input that replaces the bundled sheets with an uploaded Excel workbook.

use crate::state::{AppState, UploadedWorkbook};
use dioxus::prelude::*;
use gi_db::SheetSet;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

const INPUT_ID: &str = "gi-workbook-upload";
const ACCEPT: &str = ".xlsx,.xls,.xlsm,.xlsb,.ods";

/// Name and bytes of the file chosen in `input_id`, if any.
async fn read_selected_file(input_id: &str) -> Result<Option<(String, Vec<u8>)>, JsValue> {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .ok_or_else(|| JsValue::from_str("upload input not found"))?
        .dyn_into::<HtmlInputElement>()?;
    let Some(file) = input.files().and_then(|files| files.item(0)) else {
        return Ok(None);
    };
    let buf = JsFuture::from(file.array_buffer()).await?;
    let u8arr = js_sys::Uint8Array::new(&buf);
    let mut bytes = vec![0u8; u8arr.length() as usize];
    u8arr.copy_to(&mut bytes[..]);
    Ok(Some((file.name(), bytes)))
}

#[component]
pub fn WorkbookUpload() -> Element {
    let mut state = use_context::<AppState>();
    let current = state
        .uploaded
        .read()
        .as_ref()
        .map(|u| u.name.clone());

    let on_change = move |_| {
        spawn(async move {
            let (name, bytes) = match read_selected_file(INPUT_ID).await {
                Ok(Some(file)) => file,
                Ok(None) => return,
                Err(e) => {
                    log::warn!("[GI] upload: could not read file: {:?}", e);
                    state
                        .error_msg
                        .set(Some("Could not read the selected file.".to_string()));
                    return;
                }
            };
            match SheetSet::from_excel_bytes(&bytes) {
                Ok(sheets) => {
                    log::info!("[GI] upload: {} with {} sheets", name, sheets.len());
                    state.loading.set(true);
                    state.uploaded.set(Some(UploadedWorkbook { name, sheets }));
                }
                Err(e) => {
                    state.error_msg.set(Some(format!("{}: {}", name, e)));
                }
            }
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center; font-size: 14px;",
            label { r#for: INPUT_ID, "Workbook:" }
            input {
                id: INPUT_ID,
                r#type: "file",
                accept: ACCEPT,
                onchange: on_change,
            }
            span {
                style: "color: #666;",
                if let Some(name) = current {
                    "Showing {name}"
                } else {
                    "Showing the bundled example"
                }
            }
        }
    }
}
