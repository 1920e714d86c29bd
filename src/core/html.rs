use crate::domain::model::{HoursCell, WeekTable};

/// Escapes text interpolated into markup. Messages and labels are free
/// text and must not be able to break out of the table structure.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Serializes the view model into an HTML table. This is the reference
/// rendering used by the demo CLI; hosts with their own pipeline consume
/// the [`WeekTable`] directly.
pub fn render_html(table: &WeekTable) -> String {
    let mut html = String::new();
    html.push_str("<table>\n");
    html.push_str(&format!(
        "  <thead><tr><th>{}</th><th>{}</th></tr></thead>\n",
        escape(&table.day_header),
        escape(&table.hours_header)
    ));
    html.push_str("  <tbody>\n");

    for row in &table.rows {
        html.push_str(&format!("    <tr><td>{}</td><td>", escape(&row.day_name)));
        match &row.hours {
            HoursCell::Closed => html.push_str(&escape(&table.closed_text)),
            HoursCell::List(lines) => {
                html.push_str("<ul>");
                for line in lines {
                    html.push_str(&format!("<li>{}</li>", escape(line)));
                }
                html.push_str("</ul>");
            }
        }
        html.push_str("</td></tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}
