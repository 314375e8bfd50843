//! Standalone HTML export.
//!
//! Produces one self-contained page that loads Plotly.js from the CDN and
//! draws each figure into its own div. Used by `nicu-cli render`.

use crate::figure::Figure;
use crate::style::PLOTLY_CDN_URL;

/// Title of the exported page; matches the web app heading.
pub const PAGE_TITLE: &str = "HCI연구실 plotly를 사용한 dashboard 만들기 project";

/// Render `(heading, figure)` sections into a single HTML page.
pub fn standalone_page(sections: &[(&str, &Figure)]) -> serde_json::Result<String> {
    let mut body = String::new();
    let mut scripts = String::new();
    for (i, (heading, figure)) in sections.iter().enumerate() {
        let div_id = format!("figure-{}", i + 1);
        body.push_str(&format!(
            "<section>\n<p>{}</p>\n<div id=\"{}\"></div>\n</section>\n",
            escape_html(heading),
            div_id
        ));
        // `</` cannot appear inside a script block.
        let json = figure.to_json()?.replace("</", "<\\/");
        scripts.push_str(&format!(
            "(function() {{ var fig = {}; Plotly.newPlot('{}', fig.data, fig.layout); }})();\n",
            json, div_id
        ));
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <script src=\"{cdn}\"></script>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\
         <script>\n{scripts}</script>\n</body>\n</html>\n",
        title = escape_html(PAGE_TITLE),
        cdn = PLOTLY_CDN_URL,
        body = body,
        scripts = scripts,
    ))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{Layout, Scatter, Trace};
    use nicu_core::Cell;

    fn tiny() -> Figure {
        let mut figure = Figure::new(Layout::default());
        figure.add_trace(Trace::Scatter(Scatter::labelled_markers(
            "pH",
            vec![Cell::from("03-01")],
            vec![Cell::Number(7.4)],
        )));
        figure
    }

    #[test]
    fn page_loads_plotly_and_plots_each_section() {
        let a = tiny();
        let b = tiny();
        let page = standalone_page(&[("first", &a), ("second", &b)]).unwrap();
        assert!(page.contains(PLOTLY_CDN_URL));
        assert_eq!(page.matches("Plotly.newPlot").count(), 2);
        assert!(page.contains("id=\"figure-1\""));
        assert!(page.contains("id=\"figure-2\""));
        assert!(page.contains("<p>first</p>"));
        assert!(page.contains("\"type\":\"scatter\""));
    }

    #[test]
    fn headings_are_escaped() {
        let figure = tiny();
        let page = standalone_page(&[("<b>&", &figure)]).unwrap();
        assert!(page.contains("<p>&lt;b&gt;&amp;</p>"));
    }

    #[test]
    fn script_close_tags_are_broken_up() {
        let mut figure = Figure::new(Layout::default());
        figure.add_trace(Trace::Scatter(Scatter::labelled_markers(
            "x",
            vec![Cell::from("</script>")],
            vec![Cell::Number(1.0)],
        )));
        let page = standalone_page(&[("h", &figure)]).unwrap();
        assert_eq!(page.matches("</script>").count(), 2);
    }
}
