//! Typed navigation over an A44 publication market document.
//!
//! The raw XML is first deserialized into permissive `Raw*` mirrors (every
//! field optional) and then converted into the typed model, so each missing
//! or malformed field surfaces as a named [`SchemaError`].
//!
//! ```text
//! Publication_MarketDocument
//! └── TimeSeries*            currency_Unit.name, price_Measure_Unit.name
//!     └── Period+            timeInterval.{start,end}, resolution
//!         └── Point*         position, price.amount
//! ```

use serde::Deserialize;
use time::Duration;

use crate::{SchemaError, UtcDateTime};

/// Namespace family of publication documents; the trailing schema version
/// (`7:0`, `7:3`, ...) varies between API releases.
pub const PUBLICATION_NAMESPACE_PREFIX: &str =
    "urn:iec62325.351:tc57wg16:451-3:publicationdocument:";

/// Parsed day-ahead price document.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDocument {
    time_series: Vec<TimeSeries>,
}

impl PriceDocument {
    pub fn parse(xml: &str) -> Result<Self, SchemaError> {
        let raw = parse_raw(xml)?;

        if raw.time_series.is_empty() {
            if let Some(reason) = raw.reasons.into_iter().next() {
                return Err(SchemaError::Acknowledgement {
                    code: reason.code.unwrap_or_default(),
                    text: reason.text.unwrap_or_default(),
                });
            }
        }

        let namespace = raw.namespace.unwrap_or_default();
        if !namespace.starts_with(PUBLICATION_NAMESPACE_PREFIX) {
            return Err(SchemaError::UnexpectedNamespace { value: namespace });
        }

        let time_series = raw
            .time_series
            .into_iter()
            .map(TimeSeries::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { time_series })
    }

    pub fn time_series(&self) -> &[TimeSeries] {
        &self.time_series
    }
}

/// Reason text of an acknowledgement document, if `body` is one.
pub fn acknowledgement_reason(body: &str) -> Option<String> {
    let raw = parse_raw(body).ok()?;
    raw.reasons
        .into_iter()
        .find_map(|reason| reason.text)
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// One reported series. Currency and unit are surfaced as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    currency: String,
    price_unit: String,
    periods: Vec<Period>,
}

impl TimeSeries {
    fn from_raw(raw: RawTimeSeries) -> Result<Self, SchemaError> {
        let currency = required("currency_Unit.name", raw.currency)?;
        let price_unit = required("price_Measure_Unit.name", raw.price_unit)?;
        if raw.periods.is_empty() {
            return Err(SchemaError::MissingField { field: "Period" });
        }

        let periods = raw
            .periods
            .into_iter()
            .map(Period::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            currency,
            price_unit,
            periods,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn price_unit(&self) -> &str {
        &self.price_unit
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }
}

/// Contiguous `[start, end)` block of points at a fixed resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    start: UtcDateTime,
    end: UtcDateTime,
    resolution: Resolution,
    points: Vec<Point>,
}

impl Period {
    fn from_raw(raw: RawPeriod) -> Result<Self, SchemaError> {
        let interval = raw
            .time_interval
            .ok_or(SchemaError::MissingField {
                field: "timeInterval",
            })?;
        let start = UtcDateTime::parse_document(
            "timeInterval.start",
            &required("timeInterval.start", interval.start)?,
        )?;
        let end = UtcDateTime::parse_document(
            "timeInterval.end",
            &required("timeInterval.end", interval.end)?,
        )?;
        if end <= start {
            return Err(SchemaError::Malformed {
                message: format!("period end {end} does not follow start {start}"),
            });
        }

        let resolution = match raw.resolution {
            Some(value) => Resolution::parse(&value)?,
            None => Resolution::HOURLY,
        };
        let point_count = resolution.slots_in(end.since(start));

        let points = raw
            .points
            .into_iter()
            .map(|point| {
                let point = Point::from_raw(point)?;
                if point.position == 0 || point.position > point_count {
                    return Err(SchemaError::PositionOutOfRange {
                        position: point.position,
                        point_count,
                    });
                }
                Ok(point)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            start,
            end,
            resolution,
            points,
        })
    }

    pub fn start(&self) -> UtcDateTime {
        self.start
    }

    pub fn end(&self) -> UtcDateTime {
        self.end
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// One price slot, 1-based within its period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: u32,
    pub price: f64,
}

impl Point {
    fn from_raw(raw: RawPoint) -> Result<Self, SchemaError> {
        let raw_position = required("position", raw.position)?;
        let position = raw_position
            .trim()
            .parse::<u32>()
            .map_err(|_| SchemaError::InvalidNumber {
                field: "position",
                value: raw_position.clone(),
            })?;

        let amount = required("price.amount", raw.price_amount)?;
        let price = amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| SchemaError::InvalidNumber {
                field: "price.amount",
                value: amount.clone(),
            })?;

        Ok(Self { position, price })
    }
}

/// Slot length of a period, e.g. `PT60M` or `PT15M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    minutes: u32,
}

impl Resolution {
    pub const HOURLY: Self = Self { minutes: 60 };

    pub fn parse(input: &str) -> Result<Self, SchemaError> {
        let invalid = || SchemaError::InvalidResolution {
            value: input.to_owned(),
        };

        let body = input.trim().strip_prefix("PT").ok_or_else(invalid)?;
        let (amount, factor) = if let Some(amount) = body.strip_suffix('M') {
            (amount, 1)
        } else if let Some(amount) = body.strip_suffix('H') {
            (amount, 60)
        } else {
            return Err(invalid());
        };

        let minutes = amount
            .parse::<u32>()
            .ok()
            .and_then(|amount| amount.checked_mul(factor))
            .filter(|minutes| *minutes > 0)
            .ok_or_else(invalid)?;

        Ok(Self { minutes })
    }

    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    pub fn duration(self) -> Duration {
        Duration::minutes(i64::from(self.minutes))
    }

    /// Whole slots that fit in `span`.
    pub fn slots_in(self, span: Duration) -> u32 {
        let slots = span.whole_minutes() / i64::from(self.minutes);
        u32::try_from(slots.max(0)).unwrap_or(u32::MAX)
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, SchemaError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or(SchemaError::MissingField { field })
}

fn parse_raw(xml: &str) -> Result<RawDocument, SchemaError> {
    quick_xml::de::from_str(xml).map_err(|error| SchemaError::Malformed {
        message: error.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "@xmlns", default)]
    namespace: Option<String>,
    #[serde(rename = "TimeSeries", default)]
    time_series: Vec<RawTimeSeries>,
    #[serde(rename = "Reason", default)]
    reasons: Vec<RawReason>,
}

#[derive(Debug, Deserialize)]
struct RawTimeSeries {
    #[serde(rename = "currency_Unit.name", default)]
    currency: Option<String>,
    #[serde(rename = "price_Measure_Unit.name", default)]
    price_unit: Option<String>,
    #[serde(rename = "Period", default)]
    periods: Vec<RawPeriod>,
}

#[derive(Debug, Deserialize)]
struct RawPeriod {
    #[serde(rename = "timeInterval", default)]
    time_interval: Option<RawInterval>,
    #[serde(default)]
    resolution: Option<String>,
    #[serde(rename = "Point", default)]
    points: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawInterval {
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(default)]
    position: Option<String>,
    #[serde(rename = "price.amount", default)]
    price_amount: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReason {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    text: Option<String>,
}
