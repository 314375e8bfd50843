//! Button-driven chart rendering.
//!
//! Each dashboard has one button. Its click count is only a presence flag:
//! `None` means never clicked and the chart area is left as it was; any
//! `Some(_)` rebuilds the figure from whatever table is stored right now.

use crate::abga::{self, abga_dashboard};
use crate::error::FigureError;
use crate::figure::Figure;
use crate::weight::{self, weight_dashboard};
use nicu_core::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dashboard {
    Weight,
    Abga,
}

impl Dashboard {
    pub const ALL: [Dashboard; 2] = [Dashboard::Weight, Dashboard::Abga];

    pub fn button_label(&self) -> &'static str {
        match self {
            Dashboard::Weight => "Create weight dashboard",
            Dashboard::Abga => "Create ABGA dashboard",
        }
    }

    /// Paragraph shown above the rendered chart.
    pub fn heading(&self) -> &'static str {
        match self {
            Dashboard::Weight => weight::HEADING,
            Dashboard::Abga => abga::HEADING,
        }
    }

    /// DOM id of the chart container.
    pub fn container_id(&self) -> &'static str {
        match self {
            Dashboard::Weight => "weight-dashboard",
            Dashboard::Abga => "abga-dashboard",
        }
    }

    pub fn build(&self, table: &Table) -> Result<Figure, FigureError> {
        match self {
            Dashboard::Weight => weight_dashboard(table),
            Dashboard::Abga => abga_dashboard(table),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartUpdate {
    /// Button never clicked; leave the chart area untouched
    NoUpdate,
    Rendered(Figure),
    Failed(FigureError),
}

/// Resolve one button event against the stored table.
pub fn on_click(dashboard: Dashboard, n_clicks: Option<u32>, stored: Option<&Table>) -> ChartUpdate {
    if n_clicks.is_none() {
        return ChartUpdate::NoUpdate;
    }
    let Some(table) = stored else {
        log::warn!("[NICU] trigger: {:?} clicked with nothing stored", dashboard);
        return ChartUpdate::Failed(FigureError::NoData);
    };
    match dashboard.build(table) {
        Ok(figure) => ChartUpdate::Rendered(figure),
        Err(e) => {
            log::error!("[NICU] trigger: {:?} failed: {}", dashboard, e);
            ChartUpdate::Failed(e)
        }
    }
}
