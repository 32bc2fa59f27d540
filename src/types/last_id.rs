//! Extraction of Kraken's out-of-band `"last"` pagination cursor.
//!
//! Cursor-bearing endpoints (OHLC, recent trades, recent spreads) append a
//! trailing `"last"` field at the top level of the response, outside the
//! declared result schema:
//!
//! ```json
//! {"error":[],"result":{"XXBTZUSD":[...]},"last":"1499990400"}
//! ```
//!
//! The value may be a quoted digit string or a bare integer, and a strict
//! typed decode of the envelope cannot consume it. The body is parsed once
//! into a JSON tree, the top-level `"last"` member is plucked out, and the
//! remainder is decoded as a normal envelope. Nested keys that also happen
//! to be named `"last"` are left untouched.

use serde_json::Value;

use crate::error::KrakenError;

/// Parse a raw response body and split off the top-level `"last"` cursor.
///
/// Returns the remaining JSON tree and the cursor as an `i64` (cursors are
/// timestamp-like and can exceed 32 bits). Fails with
/// [`KrakenError::CursorExtraction`] when the body is not a JSON object or
/// carries no usable `"last"` field; the cursor is never silently defaulted.
pub(crate) fn split_last_id(raw: &str) -> Result<(Value, i64), KrakenError> {
    let mut root: Value = serde_json::from_str(raw)
        .map_err(|e| KrakenError::CursorExtraction(format!("response is not valid JSON: {e}")))?;

    let object = root.as_object_mut().ok_or_else(|| {
        KrakenError::CursorExtraction("response is not a JSON object".to_string())
    })?;

    let last = object.remove("last").ok_or_else(|| {
        KrakenError::CursorExtraction("no top-level \"last\" field in response".to_string())
    })?;

    let cursor = parse_cursor(&last)?;
    Ok((root, cursor))
}

/// Extract the `"last"` cursor from a raw response body.
///
/// Returns the body re-serialized without the cursor field (member order is
/// preserved) together with the parsed cursor value.
pub fn extract_last_id(raw: &str) -> Result<(String, i64), KrakenError> {
    let (tree, last) = split_last_id(raw)?;
    let cleaned = serde_json::to_string(&tree)?;
    Ok((cleaned, last))
}

fn parse_cursor(value: &Value) -> Result<i64, KrakenError> {
    match value {
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<i64>().map_err(|_| {
                KrakenError::CursorExtraction(format!("\"last\" value out of range: {s}"))
            })
        }
        Value::Number(n) => n
            .as_i64()
            .filter(|v| *v >= 0)
            .ok_or_else(|| {
                KrakenError::CursorExtraction(format!("\"last\" is not a non-negative integer: {n}"))
            }),
        other => Err(KrakenError::CursorExtraction(format!(
            "\"last\" is not a digit sequence: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_quoted_cursor() {
        let raw = r#"{"error":[],"result":{"X":[[1,2]]},"last":"1499990400"}"#;
        let (cleaned, last) = extract_last_id(raw).unwrap();
        assert_eq!(cleaned, r#"{"error":[],"result":{"X":[[1,2]]}}"#);
        assert_eq!(last, 1499990400);
    }

    #[test]
    fn test_extract_unquoted_cursor() {
        let raw = r#"{"error":[],"result":{"X":[[1,2]]},"last":1499990400}"#;
        let (cleaned, last) = extract_last_id(raw).unwrap();
        assert_eq!(cleaned, r#"{"error":[],"result":{"X":[[1,2]]}}"#);
        assert_eq!(last, 1499990400);
    }

    #[test]
    fn test_extract_with_whitespace_after_comma() {
        let raw = r#"{"error":[],"result":{"X":[[1,2]]}, "last": "1499990400"}"#;
        let (cleaned, last) = extract_last_id(raw).unwrap();
        assert_eq!(cleaned, r#"{"error":[],"result":{"X":[[1,2]]}}"#);
        assert_eq!(last, 1499990400);
    }

    #[test]
    fn test_extract_large_cursor_needs_64_bits() {
        let raw = r#"{"error":[],"result":{},"last":"1617043421000000000"}"#;
        let (_, last) = extract_last_id(raw).unwrap();
        assert_eq!(last, 1617043421000000000);
    }

    #[test]
    fn test_nested_last_key_is_untouched() {
        let raw = r#"{"error":[],"result":{"last":"42","X":[1]},"last":"99"}"#;
        let (cleaned, last) = extract_last_id(raw).unwrap();
        assert_eq!(last, 99);
        assert_eq!(cleaned, r#"{"error":[],"result":{"last":"42","X":[1]}}"#);
    }

    #[test]
    fn test_missing_cursor_fails() {
        let raw = r#"{"error":[],"result":{"X":[1]}}"#;
        assert!(matches!(
            extract_last_id(raw),
            Err(KrakenError::CursorExtraction(_))
        ));
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(matches!(
            extract_last_id(""),
            Err(KrakenError::CursorExtraction(_))
        ));
    }

    #[test]
    fn test_truncated_body_fails() {
        assert!(matches!(
            extract_last_id(r#"{"error":[],"result":{"X":[1]},"last":"14999"#),
            Err(KrakenError::CursorExtraction(_))
        ));
    }

    #[test]
    fn test_non_object_body_fails() {
        assert!(matches!(
            extract_last_id("[1,2,3]"),
            Err(KrakenError::CursorExtraction(_))
        ));
    }

    #[test]
    fn test_non_digit_cursor_fails() {
        for raw in [
            r#"{"error":[],"result":{},"last":"12a4"}"#,
            r#"{"error":[],"result":{},"last":""}"#,
            r#"{"error":[],"result":{},"last":-5}"#,
            r#"{"error":[],"result":{},"last":1.5}"#,
            r#"{"error":[],"result":{},"last":null}"#,
        ] {
            assert!(
                matches!(extract_last_id(raw), Err(KrakenError::CursorExtraction(_))),
                "should reject: {raw}"
            );
        }
    }
}
