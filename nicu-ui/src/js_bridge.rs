//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is loaded from its CDN at startup. The small helper script in
//! `assets/js/plotly-bridge.js` is evaluated at global scope once `Plotly`
//! exists and exposes `renderPlotlyFigure` / `destroyPlotlyFigure` on `window`.

use nicu_figures::style::PLOTLY_CDN_URL;
use nicu_figures::Figure;

static PLOTLY_BRIDGE_JS: &str = include_str!("../assets/js/plotly-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('NICU JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject the Plotly.js script tag and install the bridge once it loads.
///
/// The bridge uses `function` declarations, so it is evaluated with an
/// indirect eval at global scope and each function is promoted to `window`.
pub fn init_charts() {
    let store_js = format!(
        "window.__nicuBridgeScript = {};",
        serde_json::to_string(PLOTLY_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            if (typeof Plotly === 'undefined' && !document.getElementById('plotly-js')) {{
                var tag = document.createElement('script');
                tag.id = 'plotly-js';
                tag.src = '{PLOTLY_CDN_URL}';
                document.head.appendChild(tag);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__nicuBridgeScript);
                    delete window.__nicuBridgeScript;
                    if (typeof renderPlotlyFigure !== 'undefined') window.renderPlotlyFigure = renderPlotlyFigure;
                    if (typeof destroyPlotlyFigure !== 'undefined') window.destroyPlotlyFigure = destroyPlotlyFigure;
                    window.__nicuChartsReady = true;
                    console.log('NICU charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw a figure into the container with the given DOM id.
///
/// Polls until Plotly is loaded, the bridge is installed and the container
/// exists, since the container is usually rendered in the same frame.
pub fn render_figure(container_id: &str, figure: &Figure) {
    // JSON is a valid JS expression, so it is embedded as an object literal.
    let figure_js = match figure.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("[NICU] js_bridge: could not serialize figure: {}", e);
            return;
        }
    };
    call_js(&format!(
        r#"
        (function() {{
            var figure = {figure_js};
            var poll = setInterval(function() {{
                if (window.__nicuChartsReady &&
                    typeof window.renderPlotlyFigure !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderPlotlyFigure('{container_id}', figure);
                    }} catch(e) {{ console.error('[NICU] renderPlotlyFigure error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        r#"
        if (typeof window.destroyPlotlyFigure !== 'undefined') {{
            window.destroyPlotlyFigure('{0}');
        }} else {{
            var el = document.getElementById('{0}'); if (el) el.innerHTML = '';
        }}
        "#,
        container_id
    ));
}
