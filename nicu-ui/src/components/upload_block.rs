//! Output block for one uploaded file.

use super::{DataTable, ErrorDisplay};
use crate::state::AppState;
use dioxus::prelude::*;
use nicu_core::upload::FORMAT_ERROR_MESSAGE;
use nicu_core::UploadOutcome;
use nicu_figures::Dashboard;

#[derive(Props, Clone, PartialEq)]
pub struct UploadBlockProps {
    pub outcome: UploadOutcome,
}

/// File name, both dashboard buttons, the table and a raw-content preview;
/// or the format message when the file did not parse.
#[component]
pub fn UploadBlock(props: UploadBlockProps) -> Element {
    let state = use_context::<AppState>();

    match props.outcome {
        UploadOutcome::Rejected { .. } => rsx! {
            ErrorDisplay { message: FORMAT_ERROR_MESSAGE.to_string() }
        },
        UploadOutcome::Parsed {
            filename,
            preview,
            table,
        } => rsx! {
            div {
                h5 { "{filename}" }
                for dashboard in Dashboard::ALL {
                    button {
                        style: "margin-right: 8px;",
                        onclick: move |_| state.record_click(dashboard),
                        {dashboard.button_label()}
                    }
                }
                hr {}
                DataTable { table }
                hr {}
                div { "Raw Content" }
                pre {
                    style: "white-space: pre-wrap; word-break: break-all;",
                    "{preview}"
                }
            }
        },
    }
}
