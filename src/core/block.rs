use crate::core::format;
use crate::domain::model::{
    CacheMetadata, DateRange, DayRow, Entity, HoursCell, Occurrence, WeekTable,
};
use crate::domain::ports::{Clock, Localizer, OccurrenceProvider, UiLabel};
use crate::utils::error::{BlockError, Result};
use chrono::{DateTime, Duration, Weekday};
use chrono_tz::Tz;

/// Cache context that varies the rendered table per viewer time zone.
pub const TIMEZONE_CACHE_CONTEXT: &str = "timezone";

/// Rendered output is recomputed at most once an hour.
pub const CACHE_MAX_AGE_SECONDS: u32 = 3600;

/// Length of the rendered window in days.
pub const WINDOW_DAYS: i64 = 7;

/// Row order of the table, Sunday first.
const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Renders a weekly opening-hours table for an entity. Occurrences come
/// from the injected provider; this block only groups and formats them.
pub struct OpeningHoursBlock<P, C, L> {
    provider: P,
    clock: C,
    localizer: L,
}

impl<P, C, L> OpeningHoursBlock<P, C, L>
where
    P: OccurrenceProvider,
    C: Clock,
    L: Localizer,
{
    pub fn new(provider: P, clock: C, localizer: L) -> Self {
        Self {
            provider,
            clock,
            localizer,
        }
    }

    /// Builds the table for the seven days starting at local midnight of
    /// "today" in the clock's time zone.
    pub async fn render(&self, entity: &Entity) -> Result<WeekTable> {
        let range = week_window(&self.clock.now())?;
        tracing::debug!(
            "Requesting occurrences for '{}' in [{}, {})",
            entity.label,
            range.start,
            range.end
        );

        let mut occurrences = self.provider.occurrences(entity, &range).await?;
        tracing::debug!("Provider returned {} occurrences", occurrences.len());

        let mut cache = CacheMetadata::new();
        cache.add_context(TIMEZONE_CACHE_CONTEXT);
        cache.restrict_max_age(CACHE_MAX_AGE_SECONDS);
        cache.add_tags(&entity.cache_tags);
        for occurrence in &occurrences {
            cache.add_tags(&occurrence.cache_tags);
        }

        occurrences.sort_by(Occurrence::chronological);

        // All seven buckets exist even when empty.
        let mut buckets: [Vec<Occurrence>; 7] = Default::default();
        for occurrence in occurrences {
            buckets[occurrence.weekday_number()].push(occurrence);
        }

        let rows = WEEK
            .iter()
            .zip(buckets.iter())
            .map(|(weekday, bucket)| DayRow {
                day_name: self.localizer.weekday_name(*weekday),
                hours: if bucket.is_empty() {
                    HoursCell::Closed
                } else {
                    HoursCell::List(
                        bucket
                            .iter()
                            .map(|occurrence| {
                                format::format_hours_line(occurrence, &self.localizer)
                            })
                            .collect(),
                    )
                },
            })
            .collect();

        Ok(WeekTable {
            day_header: self.localizer.label(UiLabel::Day),
            hours_header: self.localizer.label(UiLabel::Hours),
            closed_text: self.localizer.label(UiLabel::Closed),
            rows,
            empty_text: self.localizer.empty_state(&entity.label),
            cache,
        })
    }
}

/// Seven-day half-open window starting at local midnight of "today".
/// Zones where today's midnight falls into a DST gap yield an error.
pub fn week_window(now: &DateTime<Tz>) -> Result<DateRange> {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| naive.and_local_timezone(now.timezone()).earliest())
        .ok_or_else(|| BlockError::WindowError {
            timezone: now.timezone().to_string(),
        })?;

    Ok(DateRange {
        start: midnight,
        end: midnight + Duration::days(WINDOW_DAYS),
    })
}
