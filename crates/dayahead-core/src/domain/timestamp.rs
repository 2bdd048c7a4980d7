use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::{SchemaError, ValidationError};

/// `periodStart`/`periodEnd` query parameter layout.
const API_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year][month][day][hour][minute]");

/// `timeInterval` element layout inside price documents.
const DOCUMENT_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]Z");

/// Instant guaranteed to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse an RFC3339 timestamp; any offset is converted to UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input.trim(), &Rfc3339).map_err(|_| {
            ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            }
        })?;

        Ok(Self(parsed.to_offset(UtcOffset::UTC)))
    }

    /// Parse a document timestamp such as `2015-12-31T23:00Z`.
    pub fn parse_document(field: &'static str, input: &str) -> Result<Self, SchemaError> {
        PrimitiveDateTime::parse(input.trim(), DOCUMENT_FORMAT)
            .map(|value| Self(value.assume_utc()))
            .map_err(|_| SchemaError::InvalidTimestamp {
                field,
                value: input.to_owned(),
            })
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    /// Drop minutes, seconds and sub-second precision.
    pub fn truncate_to_hour(self) -> Self {
        let value = self.0;
        Self(
            value
                - Duration::minutes(i64::from(value.minute()))
                - Duration::seconds(i64::from(value.second()))
                - Duration::nanoseconds(i64::from(value.nanosecond())),
        )
    }

    pub fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration))
    }

    /// Signed distance from `earlier` to `self`.
    pub fn since(self, earlier: Self) -> Duration {
        self.0 - earlier.0
    }

    pub fn format_api(self) -> String {
        self.0
            .format(API_FORMAT)
            .expect("UtcDateTime must be API formattable")
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .expect("UtcDateTime must be RFC3339 formattable")
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
