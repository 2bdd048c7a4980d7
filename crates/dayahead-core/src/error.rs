use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Input and document-content validation errors exposed by `dayahead-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unexpected currency '{value}', expected EUR")]
    UnexpectedCurrency { value: String },
    #[error("unexpected price measure unit '{value}', expected MWH")]
    UnexpectedPriceUnit { value: String },

    #[error("invalid domain '{value}', expected a 16-character EIC code or a known zone alias")]
    InvalidDomain { value: String },
    #[error("vat rate {value} must be finite and within [0, 1]")]
    InvalidVat { value: f64 },
    #[error("security token cannot be empty")]
    EmptyToken,
    #[error("timestamp must be RFC3339: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Failures to interpret the upstream response as a price document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unexpected content type: {value}")]
    UnexpectedContentType { value: String },
    #[error("malformed xml document: {message}")]
    Malformed { message: String },
    #[error("unexpected document namespace '{value}'")]
    UnexpectedNamespace { value: String },
    #[error("upstream acknowledgement {code}: {text}")]
    Acknowledgement { code: String, text: String },

    #[error("required field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("field '{field}' has invalid timestamp '{value}', expected YYYY-MM-DDTHH:MMZ")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("field '{field}' has invalid number '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unsupported period resolution '{value}'")]
    InvalidResolution { value: String },
    #[error("point position {position} is outside period of {point_count} points")]
    PositionOutOfRange { position: u32, point_count: u32 },
}

/// Network failure or non-success status from the upstream API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {message}")]
    Request { message: String },
    #[error("upstream returned status {status}{}", reason_suffix(.reason))]
    Status { status: u16, reason: Option<String> },
}

impl TransportError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { .. } => None,
            Self::Status { status, .. } => Some(*status),
        }
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|reason| format!(": {reason}"))
        .unwrap_or_default()
}

/// Coarse error classification used for exit codes and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceErrorKind {
    Transport,
    Schema,
    Validation,
}

impl Display for PriceErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Transport => "transport",
            Self::Schema => "schema",
            Self::Validation => "validation",
        })
    }
}

/// Top-level error returned by the price pipeline. Any variant aborts the
/// whole invocation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriceError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PriceError {
    pub const fn kind(&self) -> PriceErrorKind {
        match self {
            Self::Transport(_) => PriceErrorKind::Transport,
            Self::Schema(_) => PriceErrorKind::Schema,
            Self::Validation(_) => PriceErrorKind::Validation,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self.kind() {
            PriceErrorKind::Transport => "price.transport",
            PriceErrorKind::Schema => "price.schema",
            PriceErrorKind::Validation => "price.validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_reason_when_present() {
        let error = TransportError::Status {
            status: 400,
            reason: Some(String::from("No matching data found")),
        };
        assert_eq!(
            error.to_string(),
            "upstream returned status 400: No matching data found"
        );
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn status_error_without_reason_is_bare() {
        let error = TransportError::Status {
            status: 503,
            reason: None,
        };
        assert_eq!(error.to_string(), "upstream returned status 503");
    }

    #[test]
    fn price_error_codes_follow_kind() {
        let error = PriceError::from(SchemaError::MissingField {
            field: "position",
        });
        assert_eq!(error.kind(), PriceErrorKind::Schema);
        assert_eq!(error.code(), "price.schema");
        assert_eq!(error.to_string(), "required field 'position' is missing");
    }
}
