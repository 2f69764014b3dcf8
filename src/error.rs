//! Error types for the player lookup pipeline
//!
//! Two layers: `ProviderError` classifies failures talking to the upstream
//! data API, `LookupError` is the terminal outcome a caller sees. Most
//! provider failures never surface as `LookupError` - cascades log them and
//! keep going, enrichment tasks degrade to an empty result.

use thiserror::Error;

/// Terminal outcomes of a lookup, as seen by the caller.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No API credential was configured; nothing was attempted.
    #[error("player data provider is not configured (set CFB_DATA_API_KEY)")]
    Unavailable,

    /// Every search attempt came back empty.
    #[error("no results for '{name}'")]
    NotFound { name: String },
}

impl LookupError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// Failures from a single call to the upstream data API.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP 401. Fatal for the whole cascade: retrying other years with the
    /// same credential cannot succeed.
    #[error("API credential rejected (HTTP 401)")]
    AuthRejected,

    /// Any other non-success status. Retryable at the cascade level.
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the JSON shape the endpoint promises.
    #[error("undecodable API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    /// True when further attempts with the same credential are pointless.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AuthRejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_rejection_is_fatal() {
        assert!(ProviderError::AuthRejected.is_fatal());
        assert!(!ProviderError::Status {
            status: 500,
            body: "boom".to_string()
        }
        .is_fatal());
    }

    #[test]
    fn test_not_found_message_names_the_query() {
        let err = LookupError::not_found("Bo Nix");
        assert_eq!(err.to_string(), "no results for 'Bo Nix'");
    }
}
