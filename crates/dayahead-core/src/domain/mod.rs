//! # Domain Models
//!
//! Canonical domain types for day-ahead price retrieval.
//!
//! All models validate their invariants at construction time, so a value
//! that exists is a value the pipeline can use.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`UtcDateTime`] | UTC instant with the upstream wire formats |
//! | [`RequestWindow`] | Caller-requested `[start, end)` window |
//! | [`DomainCode`] | Validated EIC bidding-zone code |
//! | [`Vat`] | VAT rate applied to wholesale prices |
//! | [`ApiToken`] | Upstream security token (redacted in `Debug`) |
//! | [`PriceRecord`] | Pipeline output: time-stamped consumer price |

mod models;
mod timestamp;
mod window;
mod zone;

pub use models::{ApiToken, PriceRecord, Vat};
pub use timestamp::UtcDateTime;
pub use window::RequestWindow;
pub use zone::{DomainCode, KNOWN_ZONES};
