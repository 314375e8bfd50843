//! Plotly figure builders for the NICU dashboard.
//!
//! Figures are plain serde structs in Plotly's JSON schema. They are handed
//! to Plotly.js unchanged, either through the web app's JS bridge or embedded
//! in a standalone HTML page.
//!
//! - `figure`: traces, layout, shapes and annotations
//! - `subplots`: grid layout with colspans, like Plotly's make_subplots
//! - `weight` / `abga`: the two composite dashboards
//! - `trigger`: click-count driven rendering shared by both buttons
//! - `html`: standalone page export

pub mod abga;
pub mod error;
pub mod figure;
pub mod html;
pub mod style;
pub mod subplots;
pub mod trigger;
pub mod weight;

pub use error::FigureError;
pub use figure::Figure;
pub use trigger::{on_click, ChartUpdate, Dashboard};
