//! HMAC-SHA512 signature generation for Kraken API authentication.
//!
//! Kraken private endpoints require a signature computed as:
//! ```text
//! HMAC-SHA512(path + SHA256(nonce + POST_data), base64_decode(api_secret))
//! ```
//!
//! The signature is then base64-encoded and sent in the `API-Sign` header.
//! The POST body passed in here must be byte-for-byte identical to the body
//! that is transmitted, otherwise the server rejects the signature.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::auth::Credentials;
use crate::error::KrakenError;

type HmacSha512 = Hmac<Sha512>;

/// Sign a request for Kraken's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the base64-encoded secret
/// * `url_path` - The API endpoint path (e.g., "/0/private/Balance")
/// * `nonce` - The nonce value for this request
/// * `post_data` - The exact URL-encoded POST body that will be transmitted
///
/// # Returns
///
/// Base64-encoded HMAC-SHA512 signature for the `API-Sign` header.
pub fn sign_request(
    credentials: &Credentials,
    url_path: &str,
    nonce: u64,
    post_data: &str,
) -> Result<String, KrakenError> {
    // Decode the API secret from base64.
    let secret_decoded = BASE64
        .decode(credentials.expose_secret())
        .map_err(|_| KrakenError::Signing("API secret must be valid base64".to_string()))?;

    // Compute SHA256(nonce + POST_data).
    let nonce_str = nonce.to_string();
    let mut sha256_hasher = Sha256::new();
    sha256_hasher.update(nonce_str.as_bytes());
    sha256_hasher.update(post_data.as_bytes());
    let sha256_hash = sha256_hasher.finalize();

    // Compute HMAC-SHA512(path + sha256_hash, decoded_secret).
    let mut hmac = HmacSha512::new_from_slice(&secret_decoded)
        .map_err(|e| KrakenError::Signing(format!("invalid HMAC key: {e}")))?;
    hmac.update(url_path.as_bytes());
    hmac.update(&sha256_hash);
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64.encode(hmac_result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_golden_vector() {
        // Regression fixture: any change to the signing algorithm must break this.
        // Secret is base64("testsecret").
        let credentials = Credentials::new("test_key", "dGVzdHNlY3JldA==");

        let signature = sign_request(
            &credentials,
            "/0/private/Balance",
            1616492376594000,
            "nonce=1616492376594000",
        )
        .unwrap();

        assert_eq!(
            signature,
            "Kdk2HLIMxXfh9wtW0dc6xolS8Uazyh1KhkFTI7TOvJBMHuMbQhP0dHBhu9zPxLbUcdWZc3BGS/UucycDlv9Uvg=="
        );
    }

    #[test]
    fn test_signature_kraken_docs_vector() {
        // The worked example from Kraken's own API documentation.
        let credentials = Credentials::new(
            "key",
            "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==",
        );

        let signature = sign_request(
            &credentials,
            "/0/private/AddOrder",
            1616492376594,
            "nonce=1616492376594&ordertype=limit&pair=XBTUSD&price=37500&type=buy&volume=1.25",
        )
        .unwrap();

        assert_eq!(
            signature,
            "4/dpxb3iT4tp/ZCVEwSnEsLxx0bqyhLpdfOpc6fn7OR8+UClSV5n9E6aSS8MPtnRfp32bAb0nmbRn6H8ndwLUQ=="
        );
    }

    #[test]
    fn test_signature_deterministic() {
        let credentials = Credentials::new("test_key", "dGVzdHNlY3JldA==");

        let sig1 = sign_request(
            &credentials,
            "/0/private/TradeBalance",
            1616492376594000,
            "asset=ZUSD&nonce=1616492376594000",
        )
        .unwrap();
        let sig2 = sign_request(
            &credentials,
            "/0/private/TradeBalance",
            1616492376594000,
            "asset=ZUSD&nonce=1616492376594000",
        )
        .unwrap();

        assert_eq!(sig1, sig2);
        assert_eq!(
            sig1,
            "B4rS8pJ9LVw/RAcKa6Rlz6h+k1N3BhXulq5kwOxE4cJjz9GVti5gLSycNwy+XlrBWmAsq/f2o8GpyYMf0LVzww=="
        );
    }

    #[test]
    fn test_signature_changes_with_inputs() {
        let credentials = Credentials::new("key", "dGVzdHNlY3JldA==");

        let base =
            sign_request(&credentials, "/0/private/Balance", 12345, "nonce=12345").unwrap();
        let other_nonce =
            sign_request(&credentials, "/0/private/Balance", 12346, "nonce=12346").unwrap();
        let other_path =
            sign_request(&credentials, "/0/private/TradeBalance", 12345, "nonce=12345").unwrap();
        let other_body =
            sign_request(&credentials, "/0/private/Balance", 12345, "nonce=12345&x=1").unwrap();

        assert_ne!(base, other_nonce);
        assert_ne!(base, other_path);
        assert_ne!(base, other_body);
    }

    #[test]
    fn test_signature_rejects_invalid_secret() {
        let credentials = Credentials::new("key", "not-valid-base64!!!");

        let result = sign_request(&credentials, "/0/private/Balance", 1, "nonce=1");
        assert!(matches!(result, Err(KrakenError::Signing(_))));
    }
}
