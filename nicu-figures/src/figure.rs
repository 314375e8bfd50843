//! Plotly figure model.
//!
//! Only the attributes the dashboards set are modelled. Optional attributes
//! are skipped when unset so the serialized JSON stays close to what Plotly
//! would produce by hand.

use nicu_core::Cell;
use serde::Serialize;
use std::collections::BTreeMap;

/// A complete figure: `{ "data": [...], "layout": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Number of traces of one type ("scatter", "pie", "waterfall").
    pub fn count_traces(&self, kind: &str) -> usize {
        self.data.iter().filter(|t| t.kind() == kind).count()
    }

    /// Number of layout shapes of one kind.
    pub fn count_shapes(&self, kind: ShapeKind) -> usize {
        self.layout.shapes.iter().filter(|s| s.kind == kind).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(Scatter),
    Pie(Pie),
    Waterfall(Waterfall),
}

impl Trace {
    pub fn kind(&self) -> &'static str {
        match self {
            Trace::Scatter(_) => "scatter",
            Trace::Pie(_) => "pie",
            Trace::Waterfall(_) => "waterfall",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub x: Vec<Cell>,
    /// Raw cells; Plotly skips gaps and places text values itself
    pub y: Vec<Cell>,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub xaxis: String,
    pub yaxis: String,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            mode: "markers".to_string(),
            name: None,
            text: None,
            textposition: None,
            opacity: None,
            xaxis: AxisRef(1).x_id(),
            yaxis: AxisRef(1).y_id(),
        }
    }
}

impl Scatter {
    /// Points labelled with their own values, as every dashboard panel draws them.
    pub fn labelled_markers(name: &str, x: Vec<Cell>, y: Vec<Cell>) -> Self {
        Self {
            x,
            text: Some(y.clone()),
            y,
            mode: "markers+text".to_string(),
            name: Some(name.to_string()),
            textposition: Some("top center".to_string()),
            ..Default::default()
        }
    }

    pub fn on_axes(mut self, axes: &AxisRef) -> Self {
        self.xaxis = axes.x_id();
        self.yaxis = axes.y_id();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pie {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub domain: Domain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waterfall {
    pub x: Vec<Cell>,
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    pub increasing: MarkerStyle,
    pub decreasing: MarkerStyle,
    pub xaxis: String,
    pub yaxis: String,
}

/// `{ "marker": { "color": ... } }` as used by waterfall increasing/decreasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub marker: Marker,
}

impl MarkerStyle {
    pub fn color(color: &str) -> Self {
        Self {
            marker: Marker {
                color: color.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// 1-based axis pair index: 1 is `x`/`y`, 2 is `x2`/`y2`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRef(pub usize);

impl AxisRef {
    fn suffix(&self) -> String {
        if self.0 <= 1 {
            String::new()
        } else {
            self.0.to_string()
        }
    }

    /// Trace-side id: "x", "x2", ...
    pub fn x_id(&self) -> String {
        format!("x{}", self.suffix())
    }

    pub fn y_id(&self) -> String {
        format!("y{}", self.suffix())
    }

    /// Layout-side key: "xaxis", "xaxis2", ...
    pub fn x_key(&self) -> String {
        format!("xaxis{}", self.suffix())
    }

    pub fn y_key(&self) -> String {
        format!("yaxis{}", self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverlabel: Option<HoverLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    /// `xaxis`, `yaxis2`, ... keyed by their layout name
    #[serde(flatten)]
    pub axes: BTreeMap<String, Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub domain: [f64; 2],
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub bgcolor: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub xanchor: String,
    pub yanchor: String,
    pub showarrow: bool,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub xref: String,
    pub yref: String,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub line: ShapeLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShapeLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Shape {
    /// Dotted horizontal line across the whole width of one subplot.
    pub fn hline(axes: &AxisRef, y: f64) -> Self {
        Self {
            kind: ShapeKind::Line,
            xref: format!("{} domain", axes.x_id()),
            yref: axes.y_id(),
            x0: 0.0,
            x1: 1.0,
            y0: y,
            y1: y,
            line: ShapeLine {
                dash: Some("dot".to_string()),
                width: None,
            },
            fillcolor: None,
            opacity: None,
        }
    }

    /// Filled band between two y values across the whole width of one subplot.
    pub fn hrect(axes: &AxisRef, y0: f64, y1: f64, fillcolor: &str, opacity: f64) -> Self {
        Self {
            kind: ShapeKind::Rect,
            xref: format!("{} domain", axes.x_id()),
            yref: axes.y_id(),
            x0: 0.0,
            x1: 1.0,
            y0,
            y1,
            line: ShapeLine {
                dash: None,
                width: Some(0.0),
            },
            fillcolor: Some(fillcolor.to_string()),
            opacity: Some(opacity),
        }
    }
}
