use crate::domain::model::{Entity, Occurrence};
use crate::utils::error::{BlockError, Result};
use crate::utils::validation::{validate_label, validate_timezone, Validate};
use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

#[derive(Debug, Clone, Parser)]
#[command(name = "opening-hours-block")]
#[command(about = "Render a weekly opening-hours table for an entity")]
pub struct CliConfig {
    /// IANA time zone the table is rendered in
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Display label of the entity the hours belong to
    #[arg(long, default_value = "Sample venue")]
    pub label: String,

    /// TOML file with occurrence fixtures; sample data is used when omitted
    #[arg(long)]
    pub fixtures: Option<String>,

    /// Output format: html or json
    #[arg(long, default_value = "html")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The parsed IANA time zone, with the same check `validate()` applies.
    pub fn resolve_timezone(&self) -> Result<Tz> {
        validate_timezone("timezone", &self.timezone)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.resolve_timezone()?;
        validate_label("label", &self.label)?;

        match self.format.as_str() {
            "html" | "json" => Ok(()),
            other => Err(BlockError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "expected 'html' or 'json'".to_string(),
            }),
        }
    }
}

/// Raw fixture file. Timestamps are local wall-clock times in the
/// configured zone, `YYYY-MM-DDTHH:MM:SS`.
///
/// ```toml
/// [entity]
/// label = "The Local Library"
/// cache_tags = ["node:42"]
///
/// [[occurrence]]
/// start = "2026-08-24T09:00:00"
/// end = "2026-08-24T17:00:00"
/// open = true
/// messages = ["Holiday"]
/// cache_tags = ["oh_occurrence:1"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub entity: Option<FixtureEntity>,
    #[serde(default, rename = "occurrence")]
    pub occurrences: Vec<FixtureOccurrence>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEntity {
    pub label: String,
    #[serde(default)]
    pub cache_tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureOccurrence {
    pub start: String,
    pub end: String,
    #[serde(default = "default_open")]
    pub open: bool,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub cache_tags: Vec<String>,
}

fn default_open() -> bool {
    true
}

impl FixtureFile {
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn into_occurrences(self, tz: Tz) -> Result<Vec<Occurrence>> {
        self.occurrences
            .into_iter()
            .map(|fixture| fixture.into_occurrence(tz))
            .collect()
    }
}

impl FixtureEntity {
    pub fn into_entity(self) -> Entity {
        Entity {
            label: self.label,
            cache_tags: self.cache_tags,
        }
    }
}

impl FixtureOccurrence {
    pub fn into_occurrence(self, tz: Tz) -> Result<Occurrence> {
        Ok(Occurrence {
            start: local_timestamp(tz, &self.start)?,
            end: local_timestamp(tz, &self.end)?,
            open: self.open,
            messages: self.messages,
            cache_tags: self.cache_tags,
        })
    }
}

fn local_timestamp(tz: Tz, value: &str) -> Result<DateTime<Tz>> {
    let naive: NaiveDateTime = value.parse()?;
    naive
        .and_local_timezone(tz)
        .earliest()
        .ok_or_else(|| BlockError::InvalidConfigValueError {
            field: "occurrence".to_string(),
            value: value.to_string(),
            reason: format!("time does not exist in {}", tz),
        })
}
