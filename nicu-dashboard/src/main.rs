//! NICU weight and blood gas dashboards.
//!
//! Upload one or more CSV/Excel exports, browse them as paginated tables and
//! draw two composite Plotly figures from the last file that parsed.
//!
//! Data flow:
//! 1. The upload zone reads the selected files and runs them through the
//!    table store; each file gets its own output block with two buttons.
//! 2. A button click bumps that dashboard's click count.
//! 3. One effect per dashboard re-runs on its click count, builds the figure
//!    from the stored table and hands it to Plotly.js.

use dioxus::prelude::*;
use nicu_figures::html::PAGE_TITLE;
use nicu_figures::{on_click, ChartUpdate, Dashboard};
use nicu_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, UploadBlock, UploadZone,
};
use nicu_ui::js_bridge;
use nicu_ui::state::{AppState, ChartStatus};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("nicu-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect 1: Load Plotly.js once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
    });

    // ─── Effects 2 and 3: Rebuild a dashboard whenever its button is clicked ───
    use_dashboard_effect(state, Dashboard::Weight);
    use_dashboard_effect(state, Dashboard::Abga);

    let outcomes = state.outcomes.read().clone();

    // ─── Render ───
    rsx! {
        div {
            style: "margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { "{PAGE_TITLE}" }

            UploadZone {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.reading.read() {
                LoadingSpinner {}
            }

            DashboardSection { dashboard: Dashboard::Weight }
            DashboardSection { dashboard: Dashboard::Abga }

            for (i, outcome) in outcomes.into_iter().enumerate() {
                UploadBlock { key: "{i}", outcome }
            }
        }
    }
}

/// Re-run the click handler of one dashboard whenever its click count changes.
///
/// Only the click count is subscribed to; the store is peeked so a new upload
/// does not redraw charts by itself.
fn use_dashboard_effect(state: AppState, dashboard: Dashboard) {
    use_effect(move || {
        let clicks = state.clicks(dashboard)();
        let update = {
            let store = state.store.peek();
            on_click(dashboard, clicks, store.table())
        };

        let mut chart = state.chart(dashboard);
        match update {
            ChartUpdate::NoUpdate => {}
            ChartUpdate::Rendered(figure) => {
                log::info!(
                    "[NICU] dashboard: Rendering {:?} ({} traces)",
                    dashboard,
                    figure.data.len()
                );
                chart.set(ChartStatus::Shown);
                js_bridge::render_figure(dashboard.container_id(), &figure);
            }
            ChartUpdate::Failed(e) => {
                js_bridge::destroy_chart(dashboard.container_id());
                chart.set(ChartStatus::Failed(e.to_string()));
            }
        }
    });
}

/// Heading and chart area for one dashboard, or the reason it could not be drawn.
#[component]
fn DashboardSection(dashboard: Dashboard) -> Element {
    let state = use_context::<AppState>();
    let status = state.chart(dashboard).read().clone();

    match status {
        ChartStatus::Empty => rsx! {},
        ChartStatus::Shown => rsx! {
            ChartHeader { title: dashboard.heading().to_string() }
            ChartContainer { id: dashboard.container_id().to_string() }
            hr {}
        },
        ChartStatus::Failed(message) => rsx! {
            ErrorDisplay { message }
        },
    }
}
