pub mod block;
pub mod format;
pub mod html;

pub use crate::domain::model::{
    CacheMetadata, DateRange, DayRow, Entity, HoursCell, Occurrence, WeekTable,
};
pub use crate::domain::ports::{Clock, Localizer, OccurrenceProvider, UiLabel};
pub use crate::utils::error::Result;
