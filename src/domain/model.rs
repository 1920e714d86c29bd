use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use serde::Serialize;
use std::cmp::Ordering;

/// One concrete opening or closing interval for an entity, as expanded
/// from its recurring rules by the occurrence provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub open: bool,
    /// Free-text notices attached to this interval (holiday closures etc.).
    pub messages: Vec<String>,
    /// Cache-dependency descriptor: invalidating any of these tags
    /// invalidates renders that included this occurrence.
    pub cache_tags: Vec<String>,
}

impl Occurrence {
    /// Chronological total order: by start, ties broken by end. Equal
    /// intervals keep their provider order under a stable sort.
    pub fn chronological(a: &Self, b: &Self) -> Ordering {
        a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end))
    }

    /// Weekday bucket of the local start time, 0 = Sunday .. 6 = Saturday.
    pub fn weekday_number(&self) -> usize {
        self.start.weekday().num_days_from_sunday() as usize
    }
}

/// Half-open interval [start, end) requested from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl DateRange {
    pub fn intersects(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> bool {
        *start < self.end && *end > self.start
    }
}

/// The entity whose opening hours are rendered. Read-only input from the
/// hosting context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub label: String,
    pub cache_tags: Vec<String>,
}

/// Cache contexts, tags, and max-age attached to rendered output so the
/// host knows when to invalidate or vary cached renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetadata {
    pub contexts: Vec<String>,
    pub tags: Vec<String>,
    pub max_age: u32,
}

impl CacheMetadata {
    /// Output that never expires on its own.
    pub const PERMANENT: u32 = u32::MAX;

    pub fn new() -> Self {
        Self {
            contexts: Vec::new(),
            tags: Vec::new(),
            max_age: Self::PERMANENT,
        }
    }

    pub fn add_context(&mut self, context: &str) {
        if !self.contexts.iter().any(|c| c == context) {
            self.contexts.push(context.to_string());
        }
    }

    pub fn add_tags(&mut self, tags: &[String]) {
        for tag in tags {
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.clone());
            }
        }
    }

    /// Merging max-ages takes the minimum.
    pub fn restrict_max_age(&mut self, max_age: u32) {
        self.max_age = self.max_age.min(max_age);
    }
}

impl Default for CacheMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Hours column of one weekday row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HoursCell {
    /// Empty bucket: the row renders the localized "Closed" text.
    Closed,
    /// Pre-formatted bullet lines, one per occurrence.
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub day_name: String,
    pub hours: HoursCell,
}

/// The rendered weekly table: two column headers, exactly seven rows in
/// Sunday-to-Saturday order, an empty-state string, and cache metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTable {
    pub day_header: String,
    pub hours_header: String,
    pub closed_text: String,
    pub rows: Vec<DayRow>,
    pub empty_text: String,
    pub cache: CacheMetadata,
}
