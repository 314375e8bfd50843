//! Subplot grid layout.
//!
//! Follows Plotly's make_subplots conventions so figures look the same as
//! they would from the Python helper: the grid starts at the top-left,
//! horizontal spacing is `0.2 / cols`, vertical spacing is `0.3 / rows`, a
//! colspan cell also covers the gaps between the columns it spans, and each
//! `xy` cell gets its own axis pair numbered in row-major order.

use crate::error::FigureError;
use crate::figure::{Annotation, Axis, AxisRef, Domain, Font, Layout};

/// Font size of subplot title annotations.
pub const SUBPLOT_TITLE_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Cartesian cell with its own x/y axes
    Xy,
    /// Cell for domain-positioned traces such as pies
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpec {
    pub kind: CellKind,
    pub colspan: usize,
}

impl CellSpec {
    pub const fn xy() -> Self {
        Self {
            kind: CellKind::Xy,
            colspan: 1,
        }
    }

    pub const fn domain() -> Self {
        Self {
            kind: CellKind::Domain,
            colspan: 1,
        }
    }

    pub const fn span(mut self, colspan: usize) -> Self {
        self.colspan = colspan;
        self
    }
}

/// A placed grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subplot {
    pub kind: CellKind,
    pub domain: Domain,
    /// Axis pair, for `Xy` cells only
    pub axes: Option<AxisRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubplotGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<Subplot>>>,
}

impl SubplotGrid {
    /// Lay out a grid from row-major cell specs. `None` marks an empty cell
    /// or one covered by a colspan to its left.
    pub fn new(specs: &[Vec<Option<CellSpec>>]) -> Result<Self, FigureError> {
        let rows = specs.len();
        let cols = specs.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(FigureError::InvalidGrid("grid has no cells".to_string()));
        }
        if specs.iter().any(|r| r.len() != cols) {
            return Err(FigureError::InvalidGrid(format!(
                "every row must have {} cells",
                cols
            )));
        }

        let h_spacing = 0.2 / cols as f64;
        let v_spacing = 0.3 / rows as f64;
        let width = (1.0 - h_spacing * (cols - 1) as f64) / cols as f64;
        let height = (1.0 - v_spacing * (rows - 1) as f64) / rows as f64;

        let mut next_axis = 1;
        let mut cells = Vec::with_capacity(rows);
        for (r, row) in specs.iter().enumerate() {
            let mut placed = Vec::with_capacity(cols);
            let mut covered_until = 0;
            for (c, spec) in row.iter().enumerate() {
                let Some(spec) = spec else {
                    placed.push(None);
                    continue;
                };
                if c < covered_until {
                    return Err(FigureError::InvalidGrid(format!(
                        "cell ({}, {}) is covered by a colspan and must be empty",
                        r + 1,
                        c + 1
                    )));
                }
                if spec.colspan == 0 || c + spec.colspan > cols {
                    return Err(FigureError::InvalidGrid(format!(
                        "colspan {} at ({}, {}) does not fit {} columns",
                        spec.colspan,
                        r + 1,
                        c + 1,
                        cols
                    )));
                }
                covered_until = c + spec.colspan;

                let x0 = c as f64 * (width + h_spacing);
                let x1 = x0 + spec.colspan as f64 * width + (spec.colspan - 1) as f64 * h_spacing;
                let y1 = 1.0 - r as f64 * (height + v_spacing);
                let y0 = y1 - height;

                let axes = match spec.kind {
                    CellKind::Xy => {
                        let axes = AxisRef(next_axis);
                        next_axis += 1;
                        Some(axes)
                    }
                    CellKind::Domain => None,
                };
                placed.push(Some(Subplot {
                    kind: spec.kind,
                    domain: Domain {
                        x: [x0, x1],
                        y: [y0, y1],
                    },
                    axes,
                }));
            }
            cells.push(placed);
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at a 1-based (row, col).
    pub fn subplot(&self, row: usize, col: usize) -> Result<Subplot, FigureError> {
        row.checked_sub(1)
            .zip(col.checked_sub(1))
            .and_then(|(r, c)| self.cells.get(r)?.get(c)?.as_ref())
            .copied()
            .ok_or(FigureError::NoSubplot { row, col })
    }

    /// The axis pair of the `Xy` cell at a 1-based (row, col).
    pub fn axes(&self, row: usize, col: usize) -> Result<AxisRef, FigureError> {
        self.subplot(row, col)?
            .axes
            .ok_or(FigureError::NoSubplot { row, col })
    }

    /// Placed cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Subplot> {
        self.cells.iter().flatten().flatten()
    }

    /// A layout with every axis pair positioned and one title per placed
    /// cell, assigned in row-major order. Extra titles are ignored.
    pub fn layout(&self, titles: &[&str]) -> Layout {
        let mut layout = Layout::default();
        for subplot in self.iter() {
            if let Some(axes) = subplot.axes {
                layout.axes.insert(
                    axes.x_key(),
                    Axis {
                        domain: subplot.domain.x,
                        anchor: axes.y_id(),
                    },
                );
                layout.axes.insert(
                    axes.y_key(),
                    Axis {
                        domain: subplot.domain.y,
                        anchor: axes.x_id(),
                    },
                );
            }
        }
        layout.annotations = self
            .iter()
            .zip(titles)
            .map(|(subplot, title)| Annotation {
                text: title.to_string(),
                x: (subplot.domain.x[0] + subplot.domain.x[1]) / 2.0,
                y: subplot.domain.y[1],
                xref: "paper".to_string(),
                yref: "paper".to_string(),
                xanchor: "center".to_string(),
                yanchor: "bottom".to_string(),
                showarrow: false,
                font: Font {
                    size: Some(SUBPLOT_TITLE_SIZE),
                    family: None,
                },
            })
            .collect();
        layout
    }
}
