//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use std::collections::HashMap;

use crate::error::KrakenError;
use crate::rest::KrakenRestClient;
use crate::rest::method::KrakenApiMethod;
use crate::types::Paginated;

impl KrakenRestClient {
    /// Get the server time.
    ///
    /// This is useful for synchronizing local time and checking API availability.
    pub async fn get_server_time(&self) -> Result<ServerTime, KrakenError> {
        self.call(KrakenApiMethod::ServerTime, None::<&()>).await
    }

    /// Get asset information.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional request parameters to filter assets.
    pub async fn get_assets(
        &self,
        request: Option<&AssetInfoRequest>,
    ) -> Result<HashMap<String, AssetInfo>, KrakenError> {
        self.call(KrakenApiMethod::AssetInformation, request).await
    }

    /// Get tradable asset pairs.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional request parameters to filter pairs.
    pub async fn get_asset_pairs(
        &self,
        request: Option<&AssetPairsRequest>,
    ) -> Result<HashMap<String, AssetPair>, KrakenError> {
        self.call(KrakenApiMethod::AssetPairs, request).await
    }

    /// Get ticker information for one or more pairs.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Comma-separated list of pairs (e.g., "XBTUSD,ETHUSD").
    pub async fn get_ticker(
        &self,
        pairs: &str,
    ) -> Result<HashMap<String, TickerInfo>, KrakenError> {
        self.call(KrakenApiMethod::TickerInformation, Some(&[("pair", pairs)]))
            .await
    }

    /// Get OHLC (candlestick) data.
    ///
    /// Returns rows keyed by pair name together with the `"last"` cursor to
    /// pass as `since` on the next call.
    pub async fn get_ohlc(&self, request: &OhlcRequest) -> Result<Paginated<OhlcData>, KrakenError> {
        self.call_with_last(KrakenApiMethod::Ohlc, Some(request))
            .await
    }

    /// Get the order book for a pair.
    pub async fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> Result<HashMap<String, OrderBook>, KrakenError> {
        self.call(KrakenApiMethod::OrderBook, Some(request)).await
    }

    /// Get recent trades for a pair.
    ///
    /// Returns trades keyed by pair name together with the `"last"` cursor.
    pub async fn get_recent_trades(
        &self,
        request: &RecentTradesRequest,
    ) -> Result<Paginated<RecentTradesData>, KrakenError> {
        self.call_with_last(KrakenApiMethod::RecentTrades, Some(request))
            .await
    }

    /// Get recent spread data for a pair.
    ///
    /// Returns spreads keyed by pair name together with the `"last"` cursor.
    pub async fn get_recent_spreads(
        &self,
        request: &RecentSpreadsRequest,
    ) -> Result<Paginated<RecentSpreadsData>, KrakenError> {
        self.call_with_last(KrakenApiMethod::RecentSpreads, Some(request))
            .await
    }
}
