use dayahead_core::{PriceError, PriceErrorKind};
use thiserror::Error;

use crate::publish::PublishError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] dayahead_core::ValidationError),

    #[error("missing security token: pass --token or set ENTSOE_TOKEN")]
    MissingToken,

    #[error(transparent)]
    Fetch(#[from] PriceError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::MissingToken => 2,
            Self::Fetch(error) => match error.kind() {
                PriceErrorKind::Validation => 2,
                PriceErrorKind::Transport => 3,
                PriceErrorKind::Schema => 4,
            },
            Self::Publish(_) => 6,
            Self::Serialization(_) => 10,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use dayahead_core::{SchemaError, TransportError, ValidationError};

    use super::*;

    #[test]
    fn fetch_errors_map_by_kind() {
        let transport = CliError::from(PriceError::from(TransportError::Status {
            status: 503,
            reason: None,
        }));
        let schema = CliError::from(PriceError::from(SchemaError::Malformed {
            message: String::from("eof"),
        }));
        let validation = CliError::from(PriceError::from(ValidationError::UnexpectedCurrency {
            value: String::from("USD"),
        }));

        assert_eq!(transport.exit_code(), 3);
        assert_eq!(schema.exit_code(), 4);
        assert_eq!(validation.exit_code(), 2);
    }

    #[test]
    fn missing_token_is_a_usage_error() {
        assert_eq!(CliError::MissingToken.exit_code(), 2);
        assert!(CliError::MissingToken.to_string().contains("ENTSOE_TOKEN"));
    }

    #[test]
    fn publish_errors_exit_with_six() {
        let error = CliError::from(PublishError::Timeout { timeout_ms: 10 });
        assert_eq!(error.exit_code(), 6);
    }
}
