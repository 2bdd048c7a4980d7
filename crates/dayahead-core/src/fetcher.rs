use std::sync::Arc;

use tracing::debug;

use crate::document::acknowledgement_reason;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{ApiToken, DomainCode, PriceError, RequestWindow, SchemaError, TransportError};

/// Document type code for day-ahead prices.
pub const DAY_AHEAD_DOCUMENT_TYPE: &str = "A44";

pub const DEFAULT_BASE_URL: &str = "https://web-api.tp.entsoe.eu";

const XML_MEDIA_TYPE: &str = "text/xml";

/// Upstream endpoint and request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: 10_000,
        }
    }
}

/// Issues the single outbound day-ahead request and checks the transport
/// shape of the response. No retries, no caching.
#[derive(Clone)]
pub struct DocumentFetcher {
    http_client: Arc<dyn HttpClient>,
    config: FetcherConfig,
}

impl Default for DocumentFetcher {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::default()), FetcherConfig::default())
    }
}

impl DocumentFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FetcherConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Build the GET request for `window`, truncated to full UTC hours.
    pub fn build_request(
        &self,
        token: &ApiToken,
        domain: &DomainCode,
        window: &RequestWindow,
    ) -> HttpRequest {
        let bounds = window.truncated_to_hour();
        let endpoint = format!("{}/api", self.config.base_url.trim_end_matches('/'));

        HttpRequest::get(endpoint)
            .with_query("securityToken", token.expose())
            .with_query("documentType", DAY_AHEAD_DOCUMENT_TYPE)
            .with_query("in_Domain", domain.as_str())
            .with_query("out_Domain", domain.as_str())
            .with_query("periodStart", bounds.start.format_api())
            .with_query("periodEnd", bounds.end.format_api())
            .with_timeout_ms(self.config.timeout_ms)
    }

    /// Fetch the raw XML document.
    pub async fn fetch(
        &self,
        token: &ApiToken,
        domain: &DomainCode,
        window: &RequestWindow,
    ) -> Result<String, PriceError> {
        let request = self.build_request(token, domain, window);
        debug!(
            domain = %domain,
            period_start = request.query_value("periodStart").unwrap_or_default(),
            period_end = request.query_value("periodEnd").unwrap_or_default(),
            "requesting day-ahead document"
        );

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| TransportError::request(error.message()))?;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                reason: acknowledgement_reason(&response.body),
            }
            .into());
        }

        ensure_xml_content_type(response.content_type.as_deref())?;
        Ok(response.body)
    }
}

/// Media type must be `text/xml`; parameters such as `charset` are ignored.
fn ensure_xml_content_type(content_type: Option<&str>) -> Result<(), SchemaError> {
    let media_type = content_type
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if media_type.eq_ignore_ascii_case(XML_MEDIA_TYPE) {
        return Ok(());
    }

    Err(SchemaError::UnexpectedContentType {
        value: content_type.unwrap_or("<missing>").to_owned(),
    })
}
