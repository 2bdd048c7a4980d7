use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const EIC_LEN: usize = 16;

/// Bidding-zone aliases accepted in place of a raw EIC code.
pub const KNOWN_ZONES: &[(&str, &str)] = &[
    ("FI", "10YFI-1--------U"),
    ("EE", "10Y1001A1001A39I"),
    ("LV", "10YLV-1001A00074"),
    ("LT", "10YLT-1001A0008Q"),
    ("SE1", "10Y1001A1001A44P"),
    ("SE2", "10Y1001A1001A45N"),
    ("SE3", "10Y1001A1001A46L"),
    ("SE4", "10Y1001A1001A47J"),
    ("DK1", "10YDK-1--------W"),
    ("DK2", "10YDK-2--------M"),
    ("NO1", "10YNO-1--------2"),
    ("NO2", "10YNO-2--------T"),
    ("NO3", "10YNO-3--------J"),
    ("NO4", "10YNO-4--------9"),
    ("NO5", "10Y1001A1001A48H"),
    ("DE-LU", "10Y1001A1001A82H"),
    ("NL", "10YNL----------L"),
    ("FR", "10YFR-RTE------C"),
    ("CZ", "10YCZ-CEPS-----N"),
];

/// EIC code identifying a bidding zone, used as both `in_Domain` and
/// `out_Domain` of a day-ahead query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainCode(String);

impl DomainCode {
    /// Parse a raw EIC code or resolve a known zone alias (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();

        if let Some((_, code)) = KNOWN_ZONES.iter().find(|(alias, _)| *alias == normalized) {
            return Ok(Self((*code).to_owned()));
        }

        let is_eic = normalized.len() == EIC_LEN
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '-');
        if !is_eic {
            return Err(ValidationError::InvalidDomain {
                value: input.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Alias of this code, if it is one of [`KNOWN_ZONES`].
    pub fn alias(&self) -> Option<&'static str> {
        KNOWN_ZONES
            .iter()
            .find(|(_, code)| *code == self.0)
            .map(|(alias, _)| *alias)
    }
}

impl Display for DomainCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainCode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for DomainCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainCode> for String {
    fn from(value: DomainCode) -> Self {
        value.0
    }
}
