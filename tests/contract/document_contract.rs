use dayahead_core::document::{PriceDocument, PUBLICATION_NAMESPACE_PREFIX};
use dayahead_core::{PeriodClip, RequestWindow, Resolution, SchemaError, UtcDateTime};

const SINGLE_DAY: &str = include_str!("../fixtures/day_ahead_single_day.xml");
const TWO_DAYS: &str = include_str!("../fixtures/day_ahead_two_days.xml");
const ACKNOWLEDGEMENT: &str = include_str!("../fixtures/acknowledgement.xml");

fn ts(input: &str) -> UtcDateTime {
    UtcDateTime::parse(input).expect("valid timestamp")
}

#[test]
fn fixtures_use_publication_namespace() {
    for fixture in [SINGLE_DAY, TWO_DAYS] {
        assert!(fixture.contains(PUBLICATION_NAMESPACE_PREFIX));
        PriceDocument::parse(fixture).expect("fixture must parse");
    }
}

#[test]
fn single_day_document_exposes_24_hourly_points() {
    let document = PriceDocument::parse(SINGLE_DAY).expect("fixture must parse");
    assert_eq!(document.time_series().len(), 1);

    let series = &document.time_series()[0];
    assert_eq!(series.currency(), "EUR");
    assert_eq!(series.price_unit(), "MWH");
    assert_eq!(series.periods().len(), 1);

    let period = &series.periods()[0];
    assert_eq!(period.start(), ts("2016-01-01T00:00:00Z"));
    assert_eq!(period.end(), ts("2016-01-02T00:00:00Z"));
    assert_eq!(period.resolution(), Resolution::HOURLY);

    let positions: Vec<u32> = period.points().iter().map(|p| p.position).collect();
    assert_eq!(positions, (1..=24).collect::<Vec<_>>());
    assert_eq!(period.points()[0].price, 16.50);
    assert_eq!(period.points()[23].price, 21.80);
}

#[test]
fn series_are_exposed_in_document_order() {
    let document = PriceDocument::parse(TWO_DAYS).expect("fixture must parse");
    let starts: Vec<String> = document
        .time_series()
        .iter()
        .map(|series| series.periods()[0].start().format_rfc3339())
        .collect();
    assert_eq!(starts, vec!["2016-01-01T00:00:00Z", "2016-01-02T00:00:00Z"]);
}

#[test]
fn clip_of_fixture_period_matches_hourly_rule() {
    let document = PriceDocument::parse(SINGLE_DAY).expect("fixture must parse");
    let period = &document.time_series()[0].periods()[0];
    let window = RequestWindow::new(ts("2016-01-01T05:00:00Z"), ts("2016-01-01T20:00:00Z"));

    let clip = PeriodClip::for_period(period, &window);
    for point in period.points() {
        let hourly_rule = f64::from(point.position) > clip.skip_begin()
            && f64::from(point.position) <= 24.0 - clip.skip_end();
        assert_eq!(clip.includes(point.position), hourly_rule);
    }
}

#[test]
fn acknowledgement_document_is_a_schema_error() {
    let err = PriceDocument::parse(ACKNOWLEDGEMENT).expect_err("must fail");
    match err {
        SchemaError::Acknowledgement { code, text } => {
            assert_eq!(code, "999");
            assert!(text.starts_with("No matching data found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
