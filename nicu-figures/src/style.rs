//! Styling shared by both dashboards.

use crate::figure::{Font, HoverLabel, Layout};

/// Plotly.js build loaded by the web app and by exported pages.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const CANVAS_WIDTH: u32 = 2400;
pub const CANVAS_HEIGHT: u32 = 1500;

pub const HOVER_BGCOLOR: &str = "white";
pub const HOVER_FONT_SIZE: u32 = 30;
pub const HOVER_FONT_FAMILY: &str = "Rockwell";
pub const FONT_SIZE: u32 = 15;

/// Reference band fill and opacity on the ABGA panels.
pub const BAND_COLOR: &str = "green";
pub const BAND_OPACITY: f64 = 0.2;

/// Waterfall bar colours.
pub const INCREASING_COLOR: &str = "red";
pub const DECREASING_COLOR: &str = "blue";

/// Fixed canvas size plus the large hover labels used on the ward screens.
pub fn apply_dashboard_style(layout: &mut Layout) {
    layout.width = Some(CANVAS_WIDTH);
    layout.height = Some(CANVAS_HEIGHT);
    layout.hoverlabel = Some(HoverLabel {
        bgcolor: HOVER_BGCOLOR.to_string(),
        font: Font {
            size: Some(HOVER_FONT_SIZE),
            family: Some(HOVER_FONT_FAMILY.to_string()),
        },
    });
    layout.font = Some(Font {
        size: Some(FONT_SIZE),
        family: None,
    });
}
