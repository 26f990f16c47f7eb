//! Provider error types.
//!
//! Failures of the AI question-generation backends, typed so callers can
//! decide between retrying, switching engine, and giving up without string
//! matching.

use thiserror::Error;

/// Errors that can occur when talking to a generation backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (missing or invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model does not exist (or is not pulled locally).
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The model answered, but not with a parseable question bank.
    #[error("generated text is not a valid question bank: {0}")]
    InvalidBank(String),
}

impl ProviderError {
    /// Returns `true` if this error is permanent and should not be retried.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            ProviderError::AuthenticationFailed(_) | ProviderError::ModelNotFound(_)
        )
    }

    /// Returns the retry-after delay in milliseconds, if applicable.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            ProviderError::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanence_classification() {
        assert!(ProviderError::ModelNotFound("x".into()).is_permanent());
        assert!(ProviderError::AuthenticationFailed("x".into()).is_permanent());
        assert!(!ProviderError::RateLimited {
            retry_after_ms: 100
        }
        .is_permanent());
        assert!(!ProviderError::NetworkError("x".into()).is_permanent());
    }

    #[test]
    fn retry_hint() {
        assert_eq!(
            ProviderError::RateLimited {
                retry_after_ms: 5000
            }
            .retry_after_ms(),
            Some(5000)
        );
        assert_eq!(ProviderError::Timeout(60).retry_after_ms(), None);
    }
}
