use crate::domain::model::Occurrence;
use crate::domain::ports::{Localizer, UiLabel};
use chrono::DateTime;
use chrono_tz::Tz;

/// 12-hour clock without a leading zero, lowercase am/pm: `9:00am`.
pub fn format_clock(instant: &DateTime<Tz>) -> String {
    instant.format("%-I:%M%P").to_string()
}

/// Exact duplicates are dropped, first occurrence wins, order preserved.
pub fn dedupe_messages(messages: &[String]) -> Vec<&str> {
    let mut unique: Vec<&str> = Vec::new();
    for message in messages {
        if !unique.contains(&message.as_str()) {
            unique.push(message);
        }
    }
    unique
}

/// One bullet line for an occurrence: `<Open|Closed> <start> to <end>`,
/// suffixed with the space-joined messages in parentheses when present.
pub fn format_hours_line(occurrence: &Occurrence, localizer: &dyn Localizer) -> String {
    let status = if occurrence.open {
        localizer.label(UiLabel::Open)
    } else {
        localizer.label(UiLabel::Closed)
    };

    let mut line = format!(
        "{} {} to {}",
        status,
        format_clock(&occurrence.start),
        format_clock(&occurrence.end)
    );

    let messages = dedupe_messages(&occurrence.messages);
    if !messages.is_empty() {
        line.push_str(&format!(" ({})", messages.join(" ")));
    }

    line
}
