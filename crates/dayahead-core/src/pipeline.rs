//! Fetch → parse → reconcile → transform, composed into one call.

use tracing::{debug, info, warn};

use crate::document::{PriceDocument, TimeSeries};
use crate::fetcher::DocumentFetcher;
use crate::reconcile::PeriodClip;
use crate::transform::consumer_price;
use crate::{
    ApiToken, DomainCode, PriceError, PriceRecord, RequestWindow, ValidationError, Vat,
};

pub const EXPECTED_CURRENCY: &str = "EUR";
pub const EXPECTED_PRICE_UNIT: &str = "MWH";

/// Stateless day-ahead price pipeline. Every input is passed per call, so
/// one pipeline can serve any number of domains and windows concurrently.
#[derive(Clone, Default)]
pub struct PricePipeline {
    fetcher: DocumentFetcher,
}

impl PricePipeline {
    pub fn new(fetcher: DocumentFetcher) -> Self {
        Self { fetcher }
    }

    /// Ordered VAT-inclusive EUR/Wh prices inside `window`.
    ///
    /// An empty window (`start >= end`) yields an empty vector without any
    /// network call. Any fetch, schema or validation failure aborts the
    /// whole call; there are no partial results.
    pub async fn fetch_prices(
        &self,
        token: &ApiToken,
        domain: &DomainCode,
        window: RequestWindow,
        vat: Vat,
    ) -> Result<Vec<PriceRecord>, PriceError> {
        if window.is_empty() {
            debug!(start = %window.start, end = %window.end, "empty request window");
            return Ok(Vec::new());
        }

        let body = self.fetcher.fetch(token, domain, &window).await?;
        let document = PriceDocument::parse(&body)?;

        let records = extract_prices(&document, &window, vat)?;
        info!(
            domain = %domain,
            records = records.len(),
            series = document.time_series().len(),
            "day-ahead prices extracted"
        );
        Ok(records)
    }
}

/// Validate every series, then clip and convert their points.
pub fn extract_prices(
    document: &PriceDocument,
    window: &RequestWindow,
    vat: Vat,
) -> Result<Vec<PriceRecord>, PriceError> {
    for series in document.time_series() {
        validate_series(series).inspect_err(|error| {
            warn!(error = %error, "rejecting price document");
        })?;
    }

    let mut records = Vec::new();
    for series in document.time_series() {
        for period in series.periods() {
            let clip = PeriodClip::for_period(period, window);
            records.extend(
                period
                    .points()
                    .iter()
                    .filter(|point| clip.includes(point.position))
                    .map(|point| {
                        PriceRecord::new(
                            clip.point_time(point.position),
                            consumer_price(point.price, vat),
                        )
                    }),
            );
        }
    }

    // Stable: equal timestamps keep document order.
    records.sort_by_key(|record| record.time);
    Ok(records)
}

fn validate_series(series: &TimeSeries) -> Result<(), ValidationError> {
    if series.currency() != EXPECTED_CURRENCY {
        return Err(ValidationError::UnexpectedCurrency {
            value: series.currency().to_owned(),
        });
    }
    if series.price_unit() != EXPECTED_PRICE_UNIT {
        return Err(ValidationError::UnexpectedPriceUnit {
            value: series.price_unit().to_owned(),
        });
    }
    Ok(())
}
