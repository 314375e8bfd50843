//! `render`: write the dashboards for a file to a standalone HTML page.

use super::{load_table, DashboardOpt};
use anyhow::Context;
use nicu_figures::html::standalone_page;
use std::path::Path;

pub fn run_render(file: &Path, output: &Path, which: DashboardOpt) -> anyhow::Result<()> {
    let (_, table) = load_table(file)?;

    let mut built = Vec::new();
    for dashboard in which.dashboards() {
        let figure = dashboard
            .build(&table)
            .with_context(|| format!("building {:?} dashboard", dashboard))?;
        built.push((dashboard.heading(), figure));
    }
    let sections: Vec<(&str, &nicu_figures::Figure)> =
        built.iter().map(|(heading, figure)| (*heading, figure)).collect();

    let page = standalone_page(&sections)?;
    std::fs::write(output, page).with_context(|| format!("writing {}", output.display()))?;
    log::info!(
        "[NICU] cli: Wrote {} dashboard(s) to {}",
        sections.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::tests::{temp_file, WEIGHTS_CSV};
    use tempfile::tempdir;
    use nicu_figures::abga::HEADING as ABGA_HEADING;
    use nicu_figures::weight::HEADING as WEIGHT_HEADING;

    #[test]
    fn renders_both_dashboards() {
        let dir = tempdir().unwrap();
        let input = temp_file(&dir, "render-all.csv", WEIGHTS_CSV.as_bytes());
        let output = input.with_extension("html");
        run_render(&input, &output, DashboardOpt::All).unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert_eq!(page.matches("Plotly.newPlot").count(), 2);
        assert!(page.contains(WEIGHT_HEADING));
        assert!(page.contains(ABGA_HEADING));
        assert!(page.contains("\"type\":\"waterfall\""));
    }

    #[test]
    fn weight_only_fails_without_pie_row() {
        let dir = tempdir().unwrap();
        let input = temp_file(&dir, "short.csv", b"Date,Weight,Breastfeeding_oral,TPN\n03-01,0.86,2,48\n");
        let output = input.with_extension("html");
        assert!(run_render(&input, &output, DashboardOpt::Weight).is_err());
    }
}
