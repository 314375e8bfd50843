//! Weight and intake dashboard.
//!
//! ```text
//! +----------------------------+----------------------------+
//! | weight with trendline (xy) | input(Pie chart) (domain)  |
//! +----------------------------+----------------------------+
//! |                weight diff (xy, colspan 2)              |
//! +---------------------------------------------------------+
//! ```

use crate::error::FigureError;
use crate::figure::{Figure, MarkerStyle, Pie, Scatter, Trace, Waterfall};
use crate::style::{apply_dashboard_style, DECREASING_COLOR, INCREASING_COLOR};
use crate::subplots::{CellSpec, SubplotGrid};
use nicu_core::columns::{BREASTFEEDING_ORAL, DATE, TPN, WEIGHT};
use nicu_core::derive::first_difference;
use nicu_core::{Cell, Table};

pub const HEADING: &str = "weight와 IO성분 dashboard입니다";

pub const TITLES: [&str; 3] = ["weight with trendline", "input(Pie chart)", "weight diff"];

/// Only the first two weeks of weights are plotted against the trendline.
pub const WEIGHT_POINTS: usize = 14;

/// Trendline fitted to one admission's first two weeks. Kept verbatim.
pub const TRENDLINE: [f64; WEIGHT_POINTS] = [
    0.863375, 0.7965625, 0.77, 0.771875, 0.775, 0.800625, 0.813125, 0.8546875, 0.8705625,
    0.890625, 0.9090625, 0.92375, 0.9396875, 0.9535625,
];

/// Vertical offset applied to the trendline before plotting.
pub const TRENDLINE_OFFSET: f64 = 0.2;
pub const TRENDLINE_OPACITY: f64 = 0.3;

/// Row whose intake split the pie shows.
pub const PIE_ROW: usize = 3;
pub const PIE_COLUMNS: [&str; 2] = [BREASTFEEDING_ORAL, TPN];

pub fn grid() -> Result<SubplotGrid, FigureError> {
    SubplotGrid::new(&[
        vec![Some(CellSpec::xy()), Some(CellSpec::domain())],
        vec![Some(CellSpec::xy().span(2)), None],
    ])
}

/// Build the weight dashboard from the stored table.
pub fn weight_dashboard(table: &Table) -> Result<Figure, FigureError> {
    let grid = grid()?;
    let mut layout = grid.layout(&TITLES);
    apply_dashboard_style(&mut layout);
    let mut figure = Figure::new(layout);

    let dates = table.column(DATE)?;
    let weights = table.numeric_column(WEIGHT)?;

    let trend_axes = grid.axes(1, 1)?;
    let shown = WEIGHT_POINTS.min(weights.len());
    figure.add_trace(Trace::Scatter(
        Scatter::labelled_markers(
            "weight",
            dates.clone(),
            weights[..shown].iter().copied().map(Cell::from_option).collect(),
        )
            .on_axes(&trend_axes),
    ));
    figure.add_trace(Trace::Scatter(
        Scatter {
            x: dates.clone(),
            y: TRENDLINE.iter().map(|v| Cell::Number(v + TRENDLINE_OFFSET)).collect(),
            mode: "lines".to_string(),
            name: Some("trendline".to_string()),
            opacity: Some(TRENDLINE_OPACITY),
            ..Default::default()
        }
        .on_axes(&trend_axes),
    ));

    figure.add_trace(Trace::Pie(intake_pie(table, &grid)?));

    let diff_axes = grid.axes(2, 1)?;
    let mut diff = first_difference(&weights);
    if let Some(first) = diff.first_mut() {
        *first = Some(0.0);
    }
    figure.add_trace(Trace::Waterfall(Waterfall {
        x: dates,
        y: diff,
        text: Some(table.column(WEIGHT)?),
        textposition: Some("outside".to_string()),
        increasing: MarkerStyle::color(INCREASING_COLOR),
        decreasing: MarkerStyle::color(DECREASING_COLOR),
        xaxis: diff_axes.x_id(),
        yaxis: diff_axes.y_id(),
    }));

    log::info!(
        "[NICU] weight: Built dashboard from {} rows ({} weights plotted)",
        table.len(),
        shown
    );
    Ok(figure)
}

fn intake_pie(table: &Table, grid: &SubplotGrid) -> Result<Pie, FigureError> {
    let mut values = Vec::with_capacity(PIE_COLUMNS.len());
    for column in PIE_COLUMNS {
        let value = match table.cell(PIE_ROW, column)? {
            Some(Cell::Number(v)) => Some(*v),
            Some(Cell::Empty) => None,
            Some(other) => {
                return Err(nicu_core::TableError::NonNumeric {
                    column: column.to_string(),
                    row: PIE_ROW,
                    value: other.to_string(),
                }
                .into())
            }
            None => {
                return Err(FigureError::RowOutOfRange {
                    column: column.to_string(),
                    row: PIE_ROW,
                    len: table.len(),
                })
            }
        };
        values.push(value);
    }
    Ok(Pie {
        labels: PIE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        values,
        domain: grid.subplot(1, 2)?.domain,
    })
}
