//! Columns computed from the uploaded measurements.

use crate::cell::Cell;
use crate::columns::{WEIGHT, WEIGHT_DIFF};
use crate::error::TableError;
use crate::table::Table;

/// First difference of a series.
///
/// Index 0 has no predecessor and is `None`; every other index is
/// `values[i] - values[i - 1]`, or `None` when either side is missing.
pub fn first_difference(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(None);
    for pair in values.windows(2) {
        out.push(match (pair[0], pair[1]) {
            (Some(prev), Some(cur)) => Some(cur - prev),
            _ => None,
        });
    }
    out
}

/// Add (or overwrite) `Weight_diff` on a freshly parsed table.
pub fn append_weight_diff(table: &mut Table) -> Result<(), TableError> {
    let weights = table.numeric_column(WEIGHT)?;
    let diff = first_difference(&weights)
        .into_iter()
        .map(Cell::from_option)
        .collect();
    table.set_column(WEIGHT_DIFF, diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_difference_starts_empty() {
        let diff = first_difference(&[Some(1.0), Some(1.5), Some(1.25)]);
        assert_eq!(diff, vec![None, Some(0.5), Some(-0.25)]);
        assert!(first_difference(&[]).is_empty());
        assert_eq!(first_difference(&[Some(2.0)]), vec![None]);
    }

    #[test]
    fn gaps_propagate_to_both_neighbours() {
        let diff = first_difference(&[Some(1.0), None, Some(3.0), Some(4.0)]);
        assert_eq!(diff, vec![None, None, None, Some(1.0)]);
    }

    #[test]
    fn weight_diff_is_appended_last() {
        let mut table = Table::from_rows(
            vec!["Date".into(), "Weight".into(), "TPN".into()],
            vec![
                vec![Cell::from("d1"), Cell::Number(0.80), Cell::Number(10.0)],
                vec![Cell::from("d2"), Cell::Number(0.85), Cell::Number(12.0)],
            ],
        )
        .unwrap();
        append_weight_diff(&mut table).unwrap();

        assert_eq!(table.columns().last().map(String::as_str), Some(WEIGHT_DIFF));
        let diff = table.numeric_column(WEIGHT_DIFF).unwrap();
        assert_eq!(diff[0], None);
        assert!((diff[1].unwrap() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn missing_weight_is_an_error() {
        let mut table = Table::from_rows(vec!["Date".into()], vec![vec![Cell::from("d1")]]).unwrap();
        assert_eq!(
            append_weight_diff(&mut table),
            Err(TableError::MissingColumn(WEIGHT.to_string()))
        );
    }
}
