//! Reusable Dioxus RSX components for the NICU dashboard.

mod chart_container;
mod chart_header;
mod data_table;
mod error_display;
mod loading_spinner;
mod upload_block;
mod upload_zone;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use data_table::{DataTable, PAGE_SIZE};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use upload_block::UploadBlock;
pub use upload_zone::UploadZone;
