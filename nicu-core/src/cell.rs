use serde::{Deserialize, Serialize};
use std::fmt;

/// Spellings a CSV field may use for a missing value.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single scalar value in an uploaded table.
///
/// Serializes untagged, so a row of cells becomes a plain JSON record:
/// `Empty` is `null`, numbers and booleans are JSON scalars, text is a string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    /// Infer a cell from a raw CSV field.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            return Cell::Empty;
        }
        match trimmed {
            "True" | "TRUE" | "true" => return Cell::Bool(true),
            "False" | "FALSE" | "false" => return Cell::Bool(false),
            _ => {}
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Empty,
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(field.to_string()),
        }
    }

    /// Wrap an optional number, mapping `None` to `Empty`.
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{}", b),
            // Whole numbers print without a trailing ".0", like the JSON they came from
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_numbers_text_and_missing() {
        assert_eq!(Cell::from_field("0.86"), Cell::Number(0.86));
        assert_eq!(Cell::from_field(" 12 "), Cell::Number(12.0));
        assert_eq!(Cell::from_field(""), Cell::Empty);
        assert_eq!(Cell::from_field("NaN"), Cell::Empty);
        assert_eq!(Cell::from_field("N/A"), Cell::Empty);
        assert_eq!(Cell::from_field("True"), Cell::Bool(true));
        assert_eq!(Cell::from_field("2022-03-01"), Cell::Text("2022-03-01".to_string()));
    }

    #[test]
    fn spreadsheet_na_spellings_are_missing() {
        for marker in ["n/a", "<NA>", "#N/A", "#NA", "-NaN", "-nan", "1.#QNAN", " #N/A "] {
            assert_eq!(Cell::from_field(marker), Cell::Empty, "{marker}");
        }
        assert_eq!(Cell::from_field("na"), Cell::Text("na".to_string()));
    }

    #[test]
    fn serializes_as_plain_json_scalars() {
        let row = vec![Cell::Empty, Cell::Number(1.5), Cell::Text("a".into()), Cell::Bool(false)];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[null,1.5,"a",false]"#);

        let back: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(Cell::Number(3.0).to_string(), "3");
        assert_eq!(Cell::Number(0.7965).to_string(), "0.7965");
        assert_eq!(Cell::Empty.to_string(), "");
    }
}
