//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use nicu_core::{TableStore, UploadOutcome, UploadedFile};
use nicu_figures::Dashboard;

/// What a chart section currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartStatus {
    /// Nothing drawn yet
    #[default]
    Empty,
    /// Plotly has been asked to draw into the container
    Shown,
    /// The last build failed; the message replaces the chart
    Failed(String),
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The table the chart builders read (None until an upload parses)
    pub store: Signal<TableStore>,
    /// One outcome per file of the latest upload event, in upload order
    pub outcomes: Signal<Vec<UploadOutcome>>,
    /// Whether selected files are still being read
    pub reading: Signal<bool>,
    /// Error message if the browser could not hand over the files
    pub error_msg: Signal<Option<String>>,
    /// Click count of the weight button; None until first clicked
    pub weight_clicks: Signal<Option<u32>>,
    /// Click count of the ABGA button; None until first clicked
    pub abga_clicks: Signal<Option<u32>>,
    pub weight_chart: Signal<ChartStatus>,
    pub abga_chart: Signal<ChartStatus>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(TableStore::new()),
            outcomes: Signal::new(Vec::new()),
            reading: Signal::new(false),
            error_msg: Signal::new(None),
            weight_clicks: Signal::new(None),
            abga_clicks: Signal::new(None),
            weight_chart: Signal::new(ChartStatus::Empty),
            abga_chart: Signal::new(ChartStatus::Empty),
        }
    }

    pub fn clicks(&self, dashboard: Dashboard) -> Signal<Option<u32>> {
        match dashboard {
            Dashboard::Weight => self.weight_clicks,
            Dashboard::Abga => self.abga_clicks,
        }
    }

    pub fn chart(&self, dashboard: Dashboard) -> Signal<ChartStatus> {
        match dashboard {
            Dashboard::Weight => self.weight_chart,
            Dashboard::Abga => self.abga_chart,
        }
    }

    pub fn record_click(&self, dashboard: Dashboard) {
        let mut clicks = self.clicks(dashboard);
        let next = (*clicks.peek()).map_or(1, |n| n.saturating_add(1));
        clicks.set(Some(next));
    }

    /// Run one upload event through the store.
    ///
    /// The buttons are rendered afresh for the new blocks, so both click
    /// counts go back to unset. Charts already drawn stay on screen.
    pub fn ingest(&self, files: Vec<UploadedFile>) {
        let mut store = self.store;
        let mut outcomes = self.outcomes;
        let result = store.write().ingest(&files);
        outcomes.set(result);
        for dashboard in Dashboard::ALL {
            self.clicks(dashboard).set(None);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
