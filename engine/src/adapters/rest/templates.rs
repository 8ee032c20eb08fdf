//! HTML rendering
//!
//! Pages are embedded HTML files with `{{ key }}` placeholders. Every value
//! is HTML-escaped before substitution except the page body inserted into
//! the layout, which is itself a rendered template.

use crate::domain::ProcessStatus;

const LAYOUT_HTML: &str = include_str!("templates/layout.html");
const LOG_HTML: &str = include_str!("templates/log.html");
const STATUS_HTML: &str = include_str!("templates/status.html");

/// Render the console view
pub fn render_logs(logs: &str) -> String {
    let content = substitute(LOG_HTML, &[("logs", escape_html(logs))]);
    layout("logs", &content)
}

/// Render the process status view
pub fn render_status(status: &ProcessStatus) -> String {
    let state_class = if status.running { "running" } else { "stopped" };
    let pid = status
        .pid
        .map(|pid| pid.to_string())
        .unwrap_or_else(|| "-".to_string());
    let last_error = status.last_error.as_deref().unwrap_or("none");

    let content = substitute(
        STATUS_HTML,
        &[
            ("state_class", state_class.to_string()),
            ("running", status.running.to_string()),
            ("state", escape_html(status.state_label())),
            ("pid", pid),
            ("launches", status.launches.to_string()),
            ("last_error", escape_html(last_error)),
        ],
    );
    layout("status", &content)
}

fn layout(name: &str, content: &str) -> String {
    let class_for = |page: &str| if page == name { "active" } else { "" };
    substitute(
        LAYOUT_HTML,
        &[
            ("name", escape_html(name)),
            ("logs_class", class_for("logs").to_string()),
            ("status_class", class_for("status").to_string()),
            ("content", content.to_string()),
        ],
    )
}

/// Replace `{{ key }}` placeholders in a single pass
///
/// Substituted text is never rescanned. Unknown placeholders are kept as-is.
fn substitute(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = after_open[..close].trim();
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
