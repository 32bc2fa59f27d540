//! Example: Working with KrakenError and ApiError.
//!
//! Run with: cargo run --example error_handling

use kraken_rest_client::KrakenError;
use kraken_rest_client::error::{ApiError, error_codes};

fn main() {
    let api_error = ApiError::new(vec![
        "EAPI:Rate limit exceeded".to_string(),
        "EService:Busy".to_string(),
    ]);
    println!("API error: {}", api_error);
    println!("First error: {:?}", api_error.first());
    println!("Is rate limit: {}", api_error.is_rate_limit());

    let err = KrakenError::Api(api_error.clone());
    match err {
        KrakenError::Api(inner) => {
            if inner.first() == Some(error_codes::RATE_LIMIT_EXCEEDED) {
                println!("Matched known rate limit error");
            }
        }
        _ => {
            println!("Unexpected error type");
        }
    }
}
