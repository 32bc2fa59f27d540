//! Private REST API endpoints (authentication required).

mod types;

pub use types::*;

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::KrakenError;
use crate::rest::KrakenRestClient;
use crate::rest::method::KrakenApiMethod;

impl KrakenRestClient {
    /// Get the account balance for all assets.
    pub async fn get_account_balance(&self) -> Result<HashMap<String, Decimal>, KrakenError> {
        self.call(KrakenApiMethod::AccountBalance, None::<&()>)
            .await
    }

    /// Get the trade balance.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional request parameters; the base asset defaults
    ///   to ZUSD when omitted.
    pub async fn get_trade_balance(
        &self,
        request: Option<&TradeBalanceRequest>,
    ) -> Result<TradeBalance, KrakenError> {
        self.call(KrakenApiMethod::TradeBalance, request).await
    }

    /// Get open orders.
    pub async fn get_open_orders(
        &self,
        request: Option<&OpenOrdersRequest>,
    ) -> Result<OpenOrders, KrakenError> {
        self.call(KrakenApiMethod::OpenOrders, request).await
    }

    /// Get closed orders.
    pub async fn get_closed_orders(
        &self,
        request: Option<&ClosedOrdersRequest>,
    ) -> Result<ClosedOrders, KrakenError> {
        self.call(KrakenApiMethod::ClosedOrders, request).await
    }

    /// Query information about specific orders.
    ///
    /// Returns orders keyed by transaction ID.
    pub async fn query_orders(
        &self,
        request: &QueryOrdersRequest,
    ) -> Result<HashMap<String, Order>, KrakenError> {
        self.call(KrakenApiMethod::OrdersInformation, Some(request))
            .await
    }

    /// Get trades history.
    pub async fn get_trades_history(
        &self,
        request: Option<&TradesHistoryRequest>,
    ) -> Result<TradesHistory, KrakenError> {
        self.call(KrakenApiMethod::TradesHistory, request).await
    }

    /// Query information about specific trades.
    ///
    /// Returns trades keyed by trade transaction ID.
    pub async fn query_trades(
        &self,
        request: &QueryTradesRequest,
    ) -> Result<HashMap<String, TradeInfo>, KrakenError> {
        self.call(KrakenApiMethod::TradesInformation, Some(request))
            .await
    }

    /// Get open margin positions.
    ///
    /// Returns positions keyed by position transaction ID.
    pub async fn get_open_positions(
        &self,
        request: Option<&OpenPositionsRequest>,
    ) -> Result<HashMap<String, Position>, KrakenError> {
        self.call(KrakenApiMethod::OpenPositions, request).await
    }

    /// Get ledger entries.
    pub async fn get_ledgers(
        &self,
        request: Option<&LedgersRequest>,
    ) -> Result<LedgersInfo, KrakenError> {
        self.call(KrakenApiMethod::LedgersInformation, request).await
    }

    /// Query information about specific ledger entries.
    ///
    /// Returns entries keyed by ledger ID.
    pub async fn query_ledgers(
        &self,
        request: &QueryLedgersRequest,
    ) -> Result<HashMap<String, LedgerEntry>, KrakenError> {
        self.call(KrakenApiMethod::QueryLedgers, Some(request))
            .await
    }

    /// Get trade volume and fee tier information.
    pub async fn get_trade_volume(
        &self,
        request: Option<&TradeVolumeRequest>,
    ) -> Result<TradeVolume, KrakenError> {
        self.call(KrakenApiMethod::TradeVolume, request).await
    }
}
