use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use opening_hours_block::{
    render_html, Clock, DefaultLocalizer, Entity, FixtureFile, FixtureProvider, HoursCell,
    Occurrence, OpeningHoursBlock, CACHE_MAX_AGE_SECONDS, TIMEZONE_CACHE_CONTEXT,
};
use std::io::Write;

struct FixedClock(DateTime<Tz>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

fn entity() -> Entity {
    Entity {
        label: "The Local Library".to_string(),
        cache_tags: vec!["node:42".to_string()],
    }
}

fn occurrence(
    tz: Tz,
    day: u32,
    start: (u32, u32),
    end: (u32, u32),
    open: bool,
    messages: &[&str],
    tags: &[&str],
) -> Occurrence {
    Occurrence {
        start: tz
            .with_ymd_and_hms(2026, 8, day, start.0, start.1, 0)
            .unwrap(),
        end: tz.with_ymd_and_hms(2026, 8, day, end.0, end.1, 0).unwrap(),
        open,
        messages: messages.iter().map(|m| m.to_string()).collect(),
        cache_tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

// 2026-08-23 is a Sunday; the window covers Sun 23 .. Sat 29 August.
fn sunday_morning(tz: Tz) -> FixedClock {
    FixedClock(tz.with_ymd_and_hms(2026, 8, 23, 8, 0, 0).unwrap())
}

#[tokio::test]
async fn empty_week_renders_every_row_closed() {
    let tz = chrono_tz::America::New_York;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();

    assert_eq!(table.rows.len(), 7);
    let names: Vec<&str> = table.rows.iter().map(|r| r.day_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday"
        ]
    );
    assert!(table.rows.iter().all(|r| r.hours == HoursCell::Closed));

    let html = render_html(&table);
    assert_eq!(html.matches("<td>Closed</td>").count(), 7);
    assert!(!html.contains("<ul>"));
}

#[tokio::test]
async fn open_occurrence_renders_the_exact_hours_line() {
    let tz = chrono_tz::America::New_York;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![occurrence(
            tz,
            26,
            (9, 0),
            (17, 0),
            true,
            &[],
            &["oh_occurrence:1"],
        )]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();

    // 2026-08-26 is a Wednesday, row index 3.
    assert_eq!(
        table.rows[3].hours,
        HoursCell::List(vec!["Open 9:00am to 5:00pm".to_string()])
    );
}

#[tokio::test]
async fn duplicate_messages_render_once_and_distinct_ones_join() {
    let tz = chrono_tz::UTC;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![
            occurrence(tz, 24, (9, 0), (17, 0), true, &["Holiday", "Holiday"], &[]),
            occurrence(tz, 25, (9, 0), (17, 0), true, &["A", "B"], &[]),
        ]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();

    let HoursCell::List(monday) = &table.rows[1].hours else {
        panic!("expected hours on Monday");
    };
    assert_eq!(monday[0], "Open 9:00am to 5:00pm (Holiday)");
    assert_eq!(monday[0].matches("Holiday").count(), 1);

    let HoursCell::List(tuesday) = &table.rows[2].hours else {
        panic!("expected hours on Tuesday");
    };
    assert_eq!(tuesday[0], "Open 9:00am to 5:00pm (A B)");
}

#[tokio::test]
async fn midnight_sunday_start_buckets_into_day_zero() {
    let tz = chrono_tz::America::New_York;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![occurrence(tz, 23, (0, 0), (6, 0), true, &[], &[])]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();

    assert_eq!(
        table.rows[0].hours,
        HoursCell::List(vec!["Open 12:00am to 6:00am".to_string()])
    );
    assert_eq!(table.rows[1].hours, HoursCell::Closed);
    assert_eq!(table.rows[6].hours, HoursCell::Closed);
}

#[tokio::test]
async fn cache_metadata_is_fixed_regardless_of_content() {
    let tz = chrono_tz::UTC;

    for occurrences in [
        vec![],
        vec![
            occurrence(tz, 24, (9, 0), (17, 0), true, &[], &["oh_occurrence:1"]),
            occurrence(tz, 28, (9, 0), (12, 0), false, &[], &["oh_occurrence:2"]),
        ],
    ] {
        let expected_tags: Vec<String> = occurrences
            .iter()
            .flat_map(|o| o.cache_tags.clone())
            .collect();

        let block = OpeningHoursBlock::new(
            FixtureProvider::new(occurrences),
            sunday_morning(tz),
            DefaultLocalizer,
        );
        let table = block.render(&entity()).await.unwrap();

        assert_eq!(table.cache.max_age, CACHE_MAX_AGE_SECONDS);
        assert_eq!(table.cache.max_age, 3600);
        assert!(table
            .cache
            .contexts
            .contains(&TIMEZONE_CACHE_CONTEXT.to_string()));
        for tag in &expected_tags {
            assert!(table.cache.tags.contains(tag), "missing tag {tag}");
        }
    }
}

#[tokio::test]
async fn occurrences_outside_the_window_are_not_fetched() {
    let tz = chrono_tz::UTC;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![
            // Previous week: must not contribute a row or a cache tag.
            occurrence(tz, 10, (9, 0), (17, 0), true, &[], &["oh_occurrence:old"]),
            occurrence(tz, 24, (9, 0), (17, 0), true, &[], &["oh_occurrence:new"]),
        ]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();

    assert_eq!(table.rows[1].hours, HoursCell::List(vec![
        "Open 9:00am to 5:00pm".to_string()
    ]));
    assert!(!table
        .cache
        .tags
        .contains(&"oh_occurrence:old".to_string()));
    assert!(table.cache.tags.contains(&"oh_occurrence:new".to_string()));
}

#[tokio::test]
async fn empty_state_carries_the_entity_label() {
    let tz = chrono_tz::UTC;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();

    assert_eq!(
        table.empty_text,
        "No opening hours found for The Local Library"
    );
    assert_eq!(table.day_header, "Day");
    assert_eq!(table.hours_header, "Hours");
}

#[tokio::test]
async fn fixture_file_round_trips_through_the_block() {
    let tz = chrono_tz::America::New_York;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[entity]
label = "The Local Library"
cache_tags = ["node:42"]

[[occurrence]]
start = "2026-08-26T09:00:00"
end = "2026-08-26T17:00:00"
messages = ["Holiday"]
cache_tags = ["oh_occurrence:1"]
"#
    )
    .unwrap();

    let fixture = FixtureFile::load(file.path().to_str().unwrap()).unwrap();
    let entity = fixture.entity.clone().unwrap().into_entity();
    let provider = FixtureProvider::new(fixture.into_occurrences(tz).unwrap());

    let block = OpeningHoursBlock::new(provider, sunday_morning(tz), DefaultLocalizer);
    let table = block.render(&entity).await.unwrap();

    assert_eq!(
        table.rows[3].hours,
        HoursCell::List(vec!["Open 9:00am to 5:00pm (Holiday)".to_string()])
    );
    assert!(table.cache.tags.contains(&"node:42".to_string()));
    assert!(table.cache.tags.contains(&"oh_occurrence:1".to_string()));
}

#[tokio::test]
async fn view_model_serializes_to_json() {
    let tz = chrono_tz::UTC;
    let block = OpeningHoursBlock::new(
        FixtureProvider::new(vec![]),
        sunday_morning(tz),
        DefaultLocalizer,
    );

    let table = block.render(&entity()).await.unwrap();
    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["cache"]["max_age"], 3600);
    assert_eq!(json["rows"].as_array().unwrap().len(), 7);
}
