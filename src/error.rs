//! Error types for the Kraken client library.

use thiserror::Error;

/// The main error type for all Kraken client operations.
#[derive(Error, Debug)]
pub enum KrakenError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Response body is not valid JSON or does not match the expected schema
    #[error("failed to decode response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request parameters could not be urlencoded
    #[error("failed to encode request parameters: {0}")]
    EncodeParams(#[from] serde_urlencoded::ser::Error),

    /// Kraken API returned an error
    #[error("Kraken API error: {0}")]
    Api(ApiError),

    /// Request signing failed (malformed secret or unusable HMAC key)
    #[error("signing error: {0}")]
    Signing(String),

    /// Missing required credentials
    #[error("missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,

    /// Expected trailing "last" cursor field absent or malformed
    #[error("cursor extraction failed: {0}")]
    CursorExtraction(String),

    /// Well-formed response that cannot be used (e.g. missing "result" field)
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// An error reported by the Kraken API in the response body.
///
/// Kraken returns errors as an ordered array of strings in the format
/// `"ECategory:Message"`, e.g. `["EGeneral:Invalid arguments"]`. The full
/// list is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The ordered list of error strings exactly as returned by Kraken.
    pub errors: Vec<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.errors.join(", "))
    }
}

impl ApiError {
    /// Create a new API error from Kraken's error array.
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The first error string, if any.
    pub fn first(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    fn any_contains(&self, category: &str, needle: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.starts_with(category) && e.contains(needle))
    }

    /// Check if any reported error is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.any_contains("EAPI", "Rate limit") || self.any_contains("EOrder", "Rate limit")
    }

    /// Check if any reported error is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.any_contains("EAPI", "Invalid nonce")
    }

    /// Check if any reported error is an invalid key error.
    pub fn is_invalid_key(&self) -> bool {
        self.any_contains("EAPI", "Invalid key")
    }

    /// Check if any reported error is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.any_contains("EAPI", "Invalid signature")
    }

    /// Check if any reported error is a permission denied error.
    pub fn is_permission_denied(&self) -> bool {
        self.any_contains("EGeneral", "Permission denied")
    }
}

/// Known Kraken error codes for pattern matching.
pub mod error_codes {
    /// General errors
    pub const INVALID_ARGUMENTS: &str = "EGeneral:Invalid arguments";
    pub const PERMISSION_DENIED: &str = "EGeneral:Permission denied";
    pub const UNKNOWN_METHOD: &str = "EGeneral:Unknown method";
    pub const INTERNAL_ERROR: &str = "EGeneral:Internal error";

    /// API errors
    pub const INVALID_KEY: &str = "EAPI:Invalid key";
    pub const INVALID_SIGNATURE: &str = "EAPI:Invalid signature";
    pub const INVALID_NONCE: &str = "EAPI:Invalid nonce";
    pub const RATE_LIMIT_EXCEEDED: &str = "EAPI:Rate limit exceeded";

    /// Service errors
    pub const SERVICE_UNAVAILABLE: &str = "EService:Unavailable";
    pub const SERVICE_BUSY: &str = "EService:Busy";

    /// Query errors
    pub const UNKNOWN_ASSET_PAIR: &str = "EQuery:Unknown asset pair";
    pub const UNKNOWN_ASSET: &str = "EQuery:Unknown asset";
}
