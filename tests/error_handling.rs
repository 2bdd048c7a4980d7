//! Behavior-driven tests for error handling
//!
//! These tests verify HOW failures at each stage surface to the caller:
//! one error, no partial results, classified by kind.

use std::sync::Arc;

use dayahead_core::{
    ApiToken, DocumentFetcher, DomainCode, FetcherConfig, HttpError, HttpResponse, PriceError,
    PriceErrorKind, PricePipeline, RequestWindow, SchemaError, StaticHttpClient, TransportError,
    UtcDateTime, Vat,
};

const SINGLE_DAY: &str = include_str!("fixtures/day_ahead_single_day.xml");
const ACKNOWLEDGEMENT: &str = include_str!("fixtures/acknowledgement.xml");

async fn run(client: Arc<StaticHttpClient>) -> Result<usize, PriceError> {
    let pipeline = PricePipeline::new(DocumentFetcher::new(client, FetcherConfig::default()));
    let token = ApiToken::new("token-123").expect("valid token");
    let domain = DomainCode::parse("FI").expect("known zone");
    let window = RequestWindow::new(
        UtcDateTime::parse("2016-01-01T00:00:00Z").expect("valid"),
        UtcDateTime::parse("2016-01-02T00:00:00Z").expect("valid"),
    );

    pipeline
        .fetch_prices(&token, &domain, window, Vat::new(0.24).expect("valid vat"))
        .await
        .map(|records| records.len())
}

// =============================================================================
// Error Handling: Transport
// =============================================================================

#[tokio::test]
async fn when_network_fails_caller_receives_transport_error() {
    // Given: A transport that cannot connect
    let client = Arc::new(StaticHttpClient::failing(HttpError::new(
        "connection failed: dns error",
    )));

    // When: Prices are requested
    let error = run(client).await.expect_err("must fail");

    // Then: The error is a transport error without a status
    assert_eq!(error.kind(), PriceErrorKind::Transport);
    assert_eq!(error.code(), "price.transport");
    assert!(error.to_string().contains("dns error"));
}

#[tokio::test]
async fn when_upstream_rejects_request_status_and_reason_are_reported() {
    // Given: The API answers 400 with an acknowledgement body
    let client = Arc::new(StaticHttpClient::new(HttpResponse::new(
        400,
        Some("text/xml"),
        ACKNOWLEDGEMENT,
    )));

    // When: Prices are requested
    let error = run(client).await.expect_err("must fail");

    // Then: The status and the upstream reason are both visible
    match error {
        PriceError::Transport(TransportError::Status { status, reason }) => {
            assert_eq!(status, 400);
            assert!(reason
                .expect("reason extracted")
                .starts_with("No matching data found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// Error Handling: Schema
// =============================================================================

#[tokio::test]
async fn when_content_type_is_json_schema_error_precedes_parsing() {
    // Given: A JSON response whose body would otherwise be a valid document
    let client = Arc::new(StaticHttpClient::new(HttpResponse::new(
        200,
        Some("application/json"),
        SINGLE_DAY,
    )));

    // When: Prices are requested
    let error = run(client).await.expect_err("must fail");

    // Then: The content type alone causes a schema error
    assert_eq!(
        error,
        PriceError::Schema(SchemaError::UnexpectedContentType {
            value: String::from("application/json")
        })
    );
}

#[tokio::test]
async fn when_body_is_not_xml_schema_error_is_returned() {
    // Given: A text/xml response with a truncated body
    let client = Arc::new(StaticHttpClient::new(HttpResponse::ok_xml(
        &SINGLE_DAY[..SINGLE_DAY.len() / 2],
    )));

    // When: Prices are requested
    let error = run(client).await.expect_err("must fail");

    // Then: Parsing fails as a schema error
    assert_eq!(error.kind(), PriceErrorKind::Schema);
}

#[tokio::test]
async fn when_success_body_is_acknowledgement_no_prices_are_returned() {
    // Given: A 200 response carrying an acknowledgement instead of prices
    let client = Arc::new(StaticHttpClient::new(HttpResponse::ok_xml(ACKNOWLEDGEMENT)));

    // When: Prices are requested
    let error = run(client).await.expect_err("must fail");

    // Then: The acknowledgement reason is surfaced
    assert!(matches!(
        error,
        PriceError::Schema(SchemaError::Acknowledgement { .. })
    ));
}

#[tokio::test]
async fn when_timestamp_is_malformed_field_is_named() {
    // Given: A document whose period start uses the wrong layout
    let broken = SINGLE_DAY.replacen(
        "<start>2016-01-01T00:00Z</start>\n                <end>",
        "<start>2016/01/01 00:00</start>\n                <end>",
        1,
    );
    assert_ne!(broken, SINGLE_DAY, "fixture layout changed");
    let client = Arc::new(StaticHttpClient::new(HttpResponse::ok_xml(broken)));

    // When: Prices are requested
    let error = run(client).await.expect_err("must fail");

    // Then: The error names the offending field
    assert_eq!(
        error,
        PriceError::Schema(SchemaError::InvalidTimestamp {
            field: "timeInterval.start",
            value: String::from("2016/01/01 00:00"),
        })
    );
}

// =============================================================================
// Error Handling: Security
// =============================================================================

#[test]
fn token_never_appears_in_debug_output() {
    let token = ApiToken::new("super-secret").expect("valid token");
    assert!(!format!("{token:?}").contains("super-secret"));
}
