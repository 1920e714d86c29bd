use crate::domain::model::{DateRange, Entity, Occurrence};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Weekday};
use chrono_tz::Tz;

/// Source of pre-computed opening-hours occurrences. Recurrence expansion
/// and date-range semantics live entirely behind this port; callers treat
/// the returned sequence as authoritative.
#[async_trait]
pub trait OccurrenceProvider: Send + Sync {
    async fn occurrences(&self, entity: &Entity, range: &DateRange) -> Result<Vec<Occurrence>>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

/// Fixed UI strings of the weekly table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLabel {
    Open,
    Closed,
    Day,
    Hours,
}

pub trait Localizer: Send + Sync {
    fn label(&self, label: UiLabel) -> String;
    fn weekday_name(&self, weekday: Weekday) -> String;
    /// Empty-state text parameterized by the entity's display label.
    fn empty_state(&self, entity_label: &str) -> String;
}
