pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{DefaultLocalizer, FixtureProvider, SystemClock};
pub use crate::config::{CliConfig, FixtureFile};
pub use crate::core::block::{
    week_window, OpeningHoursBlock, CACHE_MAX_AGE_SECONDS, TIMEZONE_CACHE_CONTEXT, WINDOW_DAYS,
};
pub use crate::core::html::render_html;
pub use crate::domain::model::{
    CacheMetadata, DateRange, DayRow, Entity, HoursCell, Occurrence, WeekTable,
};
pub use crate::domain::ports::{Clock, Localizer, OccurrenceProvider, UiLabel};
pub use crate::utils::error::{BlockError, Result};
