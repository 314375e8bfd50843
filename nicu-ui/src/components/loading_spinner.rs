//! Loading spinner component.

use dioxus::prelude::*;

/// Simple indicator shown while selected files are being read.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 20px; color: #666;",
            "Reading files..."
        }
    }
}
