use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Time-stamped VAT-inclusive price in EUR/Wh, the only artifact that leaves
/// the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub time: UtcDateTime,
    pub price: f64,
}

impl PriceRecord {
    pub const fn new(time: UtcDateTime, price: f64) -> Self {
        Self { time, price }
    }
}

/// VAT rate applied multiplicatively, e.g. `0.24` for 24 %.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Vat(f64);

impl Vat {
    pub fn new(rate: f64) -> Result<Self, ValidationError> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(ValidationError::InvalidVat { value: rate });
        }
        Ok(Self(rate))
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn rate(self) -> f64 {
        self.0
    }

    pub fn multiplier(self) -> f64 {
        1.0 + self.0
    }
}

/// Upstream security token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyToken);
        }
        Ok(Self(value.trim().to_owned()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}
