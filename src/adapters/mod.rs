// Adapters layer: concrete implementations of the domain ports used by
// the demo CLI and by tests. Hosts embed the crate with their own.

use crate::domain::model::{DateRange, Entity, Occurrence};
use crate::domain::ports::{Clock, Localizer, OccurrenceProvider, UiLabel};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;

/// Wall clock in a fixed IANA time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// English UI strings. Hosts with a translation layer supply their own
/// [`Localizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
    fn label(&self, label: UiLabel) -> String {
        match label {
            UiLabel::Open => "Open",
            UiLabel::Closed => "Closed",
            UiLabel::Day => "Day",
            UiLabel::Hours => "Hours",
        }
        .to_string()
    }

    fn weekday_name(&self, weekday: Weekday) -> String {
        match weekday {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
        .to_string()
    }

    fn empty_state(&self, entity_label: &str) -> String {
        format!("No opening hours found for {}", entity_label)
    }
}

/// In-memory occurrence source. Returns the stored occurrences that
/// intersect the requested half-open range, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    occurrences: Vec<Occurrence>,
}

impl FixtureProvider {
    pub fn new(occurrences: Vec<Occurrence>) -> Self {
        Self { occurrences }
    }

    /// A plausible demo week anchored on `now`: weekday office hours,
    /// with a notice on Fridays.
    pub fn sample(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let mut occurrences = Vec::new();

        for offset in 0..7u64 {
            let date = now.date_naive() + chrono::Days::new(offset);
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }

            let at = |hour, minute| {
                date.and_hms_opt(hour, minute, 0)
                    .and_then(|naive| naive.and_local_timezone(tz).earliest())
            };
            if let (Some(start), Some(end)) = (at(9, 0), at(17, 0)) {
                occurrences.push(Occurrence {
                    start,
                    end,
                    open: true,
                    messages: if date.weekday() == Weekday::Fri {
                        vec!["Front desk closes early".to_string()]
                    } else {
                        vec![]
                    },
                    cache_tags: vec![format!("oh_occurrence:{}", date)],
                });
            }
        }

        Self::new(occurrences)
    }
}

#[async_trait]
impl OccurrenceProvider for FixtureProvider {
    async fn occurrences(&self, _entity: &Entity, range: &DateRange) -> Result<Vec<Occurrence>> {
        Ok(self
            .occurrences
            .iter()
            .filter(|o| range.intersects(&o.start, &o.end))
            .cloned()
            .collect())
    }
}
