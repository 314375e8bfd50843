//! Blood gas (ABGA) dashboard.
//!
//! Five labelled scatter panels against `Date`, each with dotted lines at the
//! low and high end of the reference range and a shaded band between them.
//!
//! ```text
//! +--------+---------------------+
//! |   pH   |     HCO3 (span 2)   |
//! +--------+----------+----------+
//! |  TCO2  | Ionized  |  An.Gap  |
//! +--------+----------+----------+
//! ```

use crate::error::FigureError;
use crate::figure::{Figure, Scatter, Shape, Trace};
use crate::style::{apply_dashboard_style, BAND_COLOR, BAND_OPACITY};
use crate::subplots::{CellSpec, SubplotGrid};
use nicu_core::columns::{AN_GAP, DATE, HCO3, IONIZED_CA, PH, TCO2};
use nicu_core::Table;

pub const HEADING: &str = "혈액검사(ABGA) dashboard입니다.";

/// One panel: which column, where it sits (1-based), and its reference range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePanel {
    pub column: &'static str,
    pub row: usize,
    pub col: usize,
    pub low: f64,
    pub high: f64,
}

pub const PANELS: [ReferencePanel; 5] = [
    ReferencePanel { column: PH, row: 1, col: 1, low: 7.35, high: 7.45 },
    ReferencePanel { column: HCO3, row: 1, col: 2, low: 22.0, high: 26.0 },
    ReferencePanel { column: TCO2, row: 2, col: 1, low: 22.0, high: 29.0 },
    ReferencePanel { column: IONIZED_CA, row: 2, col: 2, low: 1.15, high: 1.3 },
    ReferencePanel { column: AN_GAP, row: 2, col: 3, low: 3.0, high: 11.0 },
];

pub fn grid() -> Result<SubplotGrid, FigureError> {
    SubplotGrid::new(&[
        vec![Some(CellSpec::xy()), Some(CellSpec::xy().span(2)), None],
        vec![Some(CellSpec::xy()), Some(CellSpec::xy()), Some(CellSpec::xy())],
    ])
}

/// Build the ABGA dashboard from the stored table.
pub fn abga_dashboard(table: &Table) -> Result<Figure, FigureError> {
    let grid = grid()?;
    let titles: Vec<&str> = PANELS.iter().map(|p| p.column).collect();
    let mut layout = grid.layout(&titles);
    apply_dashboard_style(&mut layout);
    let mut figure = Figure::new(layout);

    let dates = table.column(DATE)?;
    for panel in &PANELS {
        let axes = grid.axes(panel.row, panel.col)?;
        let values = table.column(panel.column)?;
        figure.add_trace(Trace::Scatter(
            Scatter::labelled_markers(panel.column, dates.clone(), values).on_axes(&axes),
        ));
        figure.layout.shapes.push(Shape::hline(&axes, panel.low));
        figure.layout.shapes.push(Shape::hline(&axes, panel.high));
        figure.layout.shapes.push(Shape::hrect(
            &axes,
            panel.low,
            panel.high,
            BAND_COLOR,
            BAND_OPACITY,
        ));
    }

    log::info!("[NICU] abga: Built dashboard from {} rows", table.len());
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::ShapeKind;
    use nicu_core::{Cell, TableError};

    fn gases(rows: usize) -> Table {
        let mut columns = vec![DATE.to_string()];
        columns.extend(PANELS.iter().map(|p| p.column.to_string()));
        let data = (0..rows)
            .map(|i| {
                let mut row = vec![Cell::Text(format!("2022-03-{:02}", i + 1))];
                row.extend(PANELS.iter().map(|p| Cell::Number((p.low + p.high) / 2.0)));
                row
            })
            .collect();
        Table::from_rows(columns, data).unwrap()
    }

    #[test]
    fn five_scatters_ten_lines_five_bands() {
        let figure = abga_dashboard(&gases(6)).unwrap();
        assert_eq!(figure.data.len(), 5);
        assert_eq!(figure.count_traces("scatter"), 5);
        assert_eq!(figure.count_shapes(ShapeKind::Line), 10);
        assert_eq!(figure.count_shapes(ShapeKind::Rect), 5);
    }

    #[test]
    fn panels_land_on_their_own_axes() {
        let figure = abga_dashboard(&gases(2)).unwrap();
        let axes: Vec<String> = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Scatter(s) => s.xaxis.clone(),
                other => panic!("unexpected trace {}", other.kind()),
            })
            .collect();
        assert_eq!(axes, ["x", "x2", "x3", "x4", "x5"]);

        let titles: Vec<&str> = figure.layout.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(titles, ["pH", "HCO3", "TCO2", "Ionized Ca", "An.Gap"]);
    }

    #[test]
    fn reference_lines_use_clinical_ranges() {
        let figure = abga_dashboard(&gases(1)).unwrap();
        let ph_lines: Vec<f64> = figure
            .layout
            .shapes
            .iter()
            .filter(|s| s.kind == ShapeKind::Line && s.yref == "y")
            .map(|s| s.y0)
            .collect();
        assert_eq!(ph_lines, vec![7.35, 7.45]);

        let an_gap_band = figure
            .layout
            .shapes
            .iter()
            .find(|s| s.kind == ShapeKind::Rect && s.yref == "y5")
            .unwrap();
        assert_eq!((an_gap_band.y0, an_gap_band.y1), (3.0, 11.0));
        assert_eq!(an_gap_band.xref, "x5 domain");
    }

    #[test]
    fn text_lab_values_are_plotted_as_is() {
        let mut table = gases(3);
        let mut ph = table.column(PH).unwrap();
        ph[0] = Cell::from("<7.0");
        table.set_column(PH, ph).unwrap();

        let figure = abga_dashboard(&table).unwrap();
        let Trace::Scatter(ph_panel) = &figure.data[0] else {
            panic!("first trace should be the pH panel");
        };
        assert_eq!(ph_panel.y[0], Cell::from("<7.0"));
        assert_eq!(ph_panel.y[1], Cell::Number(7.4));
        assert_eq!(ph_panel.text.as_ref().unwrap()[0], Cell::from("<7.0"));
    }

    #[test]
    fn missing_panel_column() {
        let table = Table::from_rows(
            vec![DATE.to_string(), PH.to_string()],
            vec![vec![Cell::from("d1"), Cell::Number(7.4)]],
        )
        .unwrap();
        assert_eq!(
            abga_dashboard(&table).unwrap_err(),
            FigureError::Table(TableError::MissingColumn(HCO3.to_string()))
        );
    }
}
