//! Response envelope shared by all Kraken REST endpoints.
//!
//! Every response body is a JSON object `{"error": [...], "result": ...}`.
//! A non-empty error list means the call failed, regardless of whether a
//! result also happened to decode.

use serde::Deserialize;

use crate::error::{ApiError, KrakenError};

/// The generic success/error wrapper Kraken puts around every response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Ordered list of error strings; empty on success.
    #[serde(default)]
    pub error: Vec<String>,
    /// The schema-specific result, absent on failure.
    pub result: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    /// Validate the envelope and unwrap the result.
    ///
    /// A non-empty error list always wins: the decoded result (if any) is
    /// discarded and the full ordered list is surfaced verbatim.
    pub fn into_result(self) -> Result<T, KrakenError> {
        if !self.error.is_empty() {
            return Err(KrakenError::Api(ApiError::new(self.error)));
        }
        self.result
            .ok_or_else(|| KrakenError::InvalidResponse("response missing 'result' field".to_string()))
    }
}

/// A result paired with the pagination cursor extracted from the response.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// The decoded result data.
    pub data: T,
    /// The extracted "last" cursor, to be passed as `since` on the next call.
    pub last: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let envelope: ResponseEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"error":[],"result":[1,2,3]}"#).unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_errors_discard_result() {
        // Even a decodable result must not be returned when errors are present.
        let envelope: ResponseEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"error":["EGeneral:Invalid arguments"],"result":[1]}"#)
                .unwrap();
        match envelope.into_result() {
            Err(KrakenError::Api(api)) => {
                assert_eq!(api.errors, vec!["EGeneral:Invalid arguments".to_string()]);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_missing_result_is_invalid() {
        let envelope: ResponseEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"error":[]}"#).unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(KrakenError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_envelope_preserves_error_order() {
        let envelope: ResponseEnvelope<()> =
            serde_json::from_str(r#"{"error":["EService:Busy","EAPI:Invalid nonce"]}"#).unwrap();
        match envelope.into_result() {
            Err(KrakenError::Api(api)) => {
                assert_eq!(api.errors[0], "EService:Busy");
                assert_eq!(api.errors[1], "EAPI:Invalid nonce");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
