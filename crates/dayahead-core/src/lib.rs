//! # dayahead core
//!
//! Day-ahead electricity price pipeline for the ENTSO-E transparency API.
//!
//! ## Overview
//!
//! One call turns `(token, domain, window, vat)` into an ordered list of
//! VAT-inclusive EUR/Wh price records:
//!
//! ```text
//! ┌──────────────────┐
//! │  PricePipeline   │  fetch_prices(token, domain, window, vat)
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ DocumentFetcher  │────▶│ HttpClient       │
//! │ (A44 request)    │     │ (reqwest/static) │
//! └────────┬─────────┘     └──────────────────┘
//!          │ raw XML
//!          ▼
//! ┌──────────────────┐
//! │ PriceDocument    │  TimeSeries → Period → Point
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ PeriodClip       │────▶│ consumer_price   │
//! │ (window clip)    │     │ (VAT, EUR/Wh)    │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | Typed access to the XML price document |
//! | [`domain`] | Timestamps, windows, zone codes, VAT, records |
//! | [`error`] | Transport, schema and validation errors |
//! | [`fetcher`] | Outbound request and content-type check |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`pipeline`] | The composed fetch-parse-reconcile-transform call |
//! | [`reconcile`] | Window clipping of period positions |
//! | [`transform`] | VAT and unit conversion |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dayahead_core::{ApiToken, DomainCode, PricePipeline, RequestWindow, UtcDateTime, Vat};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = PricePipeline::default();
//!     let token = ApiToken::new(std::env::var("ENTSOE_TOKEN")?)?;
//!     let window = RequestWindow::lookahead(UtcDateTime::now(), 24);
//!
//!     let prices = pipeline
//!         .fetch_prices(&token, &DomainCode::parse("FI")?, window, Vat::new(0.24)?)
//!         .await?;
//!     for record in &prices {
//!         println!("{} {:.8} EUR/Wh", record.time, record.price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Security
//!
//! - The security token is redacted from `Debug` output and never logged
//! - Transport error messages omit the request URL, which carries the token

pub mod document;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod pipeline;
pub mod reconcile;
pub mod transform;

// Re-export commonly used types at crate root for convenience

// Document model
pub use document::{PriceDocument, Resolution};

// Domain models
pub use domain::{ApiToken, DomainCode, PriceRecord, RequestWindow, UtcDateTime, Vat, KNOWN_ZONES};

// Error types
pub use error::{PriceError, PriceErrorKind, SchemaError, TransportError, ValidationError};

// Fetcher
pub use fetcher::{DocumentFetcher, FetcherConfig, DEFAULT_BASE_URL};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StaticHttpClient,
};

// Pipeline
pub use pipeline::PricePipeline;

// Reconciler and transformer
pub use reconcile::PeriodClip;
pub use transform::consumer_price;
