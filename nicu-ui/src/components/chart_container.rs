//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly draws into
    pub id: String,
    /// Matches the fixed figure height
    #[props(default = 1500)]
    pub min_height: u32,
}

/// A scrollable container div for one Plotly figure.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    // Figures have a fixed canvas, so narrow windows scroll sideways
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
            }
        }
    }
}
