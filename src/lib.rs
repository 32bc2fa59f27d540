//! # Kraken REST Client
//!
//! An async Rust client library for the Kraken exchange REST API.
//!
//! ## Features
//!
//! - Public market-data endpoints (server time, assets, ticker, OHLC, order book, trades, spreads)
//! - Signed private endpoints (balances, orders, trades history, ledgers, trade volume)
//! - HMAC-SHA512 request signing with strictly increasing nonces
//! - Transparent handling of Kraken's out-of-band `"last"` pagination cursor
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kraken_rest_client::rest::KrakenRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KrakenRestClient::new();
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time.unixtime);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, KrakenError};
pub use rest::{KrakenApiMethod, KrakenRestClient, Visibility};
pub use types::{Paginated, ResponseEnvelope};

/// Result type alias using KrakenError
pub type Result<T> = std::result::Result<T, KrakenError>;
