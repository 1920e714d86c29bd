use clap::Parser;
use opening_hours_block::utils::{logger, validation::Validate};
use opening_hours_block::{
    render_html, CliConfig, Clock, DefaultLocalizer, Entity, FixtureFile, FixtureProvider,
    OpeningHoursBlock, SystemClock,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting opening-hours-block");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let tz = config.resolve_timezone()?;
    let clock = SystemClock::new(tz);

    let (entity, provider) = match &config.fixtures {
        Some(path) => {
            tracing::info!("Loading occurrence fixtures from {}", path);
            let fixture = FixtureFile::load(path)?;
            let entity = match fixture.entity.clone() {
                Some(fixture_entity) => fixture_entity.into_entity(),
                None => Entity {
                    label: config.label.clone(),
                    cache_tags: vec![],
                },
            };
            let provider = FixtureProvider::new(fixture.into_occurrences(tz)?);
            (entity, provider)
        }
        None => {
            tracing::warn!("No fixture file given, using sample data");
            let entity = Entity {
                label: config.label.clone(),
                cache_tags: vec![],
            };
            (entity, FixtureProvider::sample(&clock.now()))
        }
    };

    let block = OpeningHoursBlock::new(provider, clock, DefaultLocalizer);
    let table = block.render(&entity).await?;

    tracing::info!(
        "Rendered {} rows for '{}' (max-age {}s, {} cache tags)",
        table.rows.len(),
        entity.label,
        table.cache.max_age,
        table.cache.tags.len()
    );

    match config.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&table)?),
        _ => print!("{}", render_html(&table)),
    }

    Ok(())
}
