//! Dashed drop zone wrapping the file input.

use crate::state::AppState;
use crate::upload::{read_selected_files, UPLOAD_INPUT_ID};
use dioxus::prelude::*;

/// Drop target and file picker for one or more CSV/Excel files.
///
/// The input is stretched invisibly over the whole zone so files dropped
/// anywhere on it land in the input and fire `change`.
#[component]
pub fn UploadZone() -> Element {
    let state = use_context::<AppState>();

    let on_change = move |_evt: Event<FormData>| {
        let mut reading = state.reading;
        let mut error_msg = state.error_msg;
        spawn(async move {
            reading.set(true);
            match read_selected_files(UPLOAD_INPUT_ID).await {
                Ok(files) if files.is_empty() => {}
                Ok(files) => {
                    error_msg.set(None);
                    state.ingest(files);
                }
                Err(e) => {
                    log::error!("[NICU] upload: {}", e);
                    error_msg.set(Some(e));
                }
            }
            reading.set(false);
        });
    };

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 60px; line-height: 60px; border: 1px dashed; border-radius: 5px; text-align: center; margin: 10px;",
            "Drag and Drop or "
            a { "Select Files" }
            input {
                id: UPLOAD_INPUT_ID,
                r#type: "file",
                multiple: true,
                style: "position: absolute; top: 0; left: 0; width: 100%; height: 100%; opacity: 0; cursor: pointer;",
                onchange: on_change,
            }
        }
    }
}
