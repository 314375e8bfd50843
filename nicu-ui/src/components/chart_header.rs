//! Centered heading paragraph above a dashboard figure.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        hr {}
        p {
            style: "text-align: center;",
            "{props.title}"
        }
    }
}
