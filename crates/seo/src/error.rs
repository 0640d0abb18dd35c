//! Error types for the SEO payload builder.
//!
//! Missing optional data is never an error here; builders resolve it via
//! fallback chains. These variants cover caller contract violations only:
//! structurally required fields that cannot be parsed.

use thiserror::Error;

/// Errors that can occur while building an SEO payload.
#[derive(Debug, Error)]
pub enum SeoError {
    /// A variant price amount could not be parsed as a decimal number.
    #[error("invalid price amount {amount:?}: {source}")]
    InvalidPrice {
        /// The raw amount string from the variant.
        amount: String,
        /// Underlying decimal parse failure.
        #[source]
        source: rust_decimal::Error,
    },

    /// The canonical request URL could not be parsed.
    #[error("invalid request url {url:?}: {source}")]
    InvalidUrl {
        /// The raw URL string supplied by the caller.
        url: String,
        /// Underlying URL parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for `SeoError`.
pub type Result<T> = std::result::Result<T, SeoError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_price_display() {
        let source = "abc".parse::<rust_decimal::Decimal>().unwrap_err();
        let err = SeoError::InvalidPrice {
            amount: "abc".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid price amount \"abc\""));
    }

    #[test]
    fn test_invalid_url_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = SeoError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid request url"));
    }
}
