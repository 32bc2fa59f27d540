//! Kraken REST API client.
//!
//! Provides access to the Kraken Spot REST endpoints: public market data
//! plus the signed private account endpoints. The endpoint registry is the
//! [`KrakenApiMethod`] enum; typed dispatch happens in [`KrakenRestClient`].

mod client;
mod method;
pub mod private;
pub mod public;

pub use client::{KRAKEN_BASE_URL, KrakenRestClient, KrakenRestClientBuilder};
pub use method::{KrakenApiMethod, Visibility};
