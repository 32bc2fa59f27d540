//! Types for private REST API endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{BuySell, OrderStatus, OrderType};

/// Request parameters for trade balance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradeBalanceRequest {
    /// Base asset to determine balance (default: "ZUSD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

impl TradeBalanceRequest {
    /// Create a request for a specific base asset.
    pub fn for_asset(asset: impl Into<String>) -> Self {
        Self {
            asset: Some(asset.into()),
        }
    }
}

/// Trade balance information.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeBalance {
    /// Equivalent balance (combined balance of all currencies).
    #[serde(rename = "eb")]
    pub equivalent_balance: Decimal,
    /// Trade balance (combined balance of all equity currencies).
    #[serde(rename = "tb")]
    pub trade_balance: Decimal,
    /// Margin amount of open positions.
    #[serde(rename = "m", default)]
    pub margin: Decimal,
    /// Unrealized net profit/loss of open positions.
    #[serde(rename = "n", default)]
    pub unrealized_pnl: Decimal,
    /// Cost basis of open positions.
    #[serde(rename = "c", default)]
    pub cost_basis: Decimal,
    /// Current floating valuation of open positions.
    #[serde(rename = "v", default)]
    pub floating_valuation: Decimal,
    /// Equity = trade balance + unrealized net profit/loss.
    #[serde(rename = "e")]
    pub equity: Decimal,
    /// Free margin = equity - initial margin.
    #[serde(rename = "mf")]
    pub free_margin: Decimal,
    /// Margin level = (equity / initial margin) * 100.
    #[serde(rename = "ml", default)]
    pub margin_level: Option<Decimal>,
}

/// Request parameters for open orders.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenOrdersRequest {
    /// Whether to include trades related to orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<bool>,
    /// Restrict results to given user reference ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userref: Option<i64>,
}

/// Open orders response.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrders {
    /// Open orders keyed by transaction ID.
    pub open: HashMap<String, Order>,
}

/// Request parameters for closed orders.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClosedOrdersRequest {
    /// Whether to include trades related to orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<bool>,
    /// Restrict results to given user reference ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userref: Option<i64>,
    /// Starting unix timestamp or order transaction ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Ending unix timestamp or order transaction ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Result offset for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ofs: Option<i64>,
    /// Which timestamp to use for start/end: "open", "close", or "both".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closetime: Option<String>,
}

/// Closed orders response.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedOrders {
    /// Closed orders keyed by transaction ID.
    pub closed: HashMap<String, Order>,
    /// Number of orders matching the criteria.
    #[serde(default)]
    pub count: i64,
}

/// Request parameters for querying specific orders.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOrdersRequest {
    /// Comma-separated list of transaction IDs (max 50).
    pub txid: String,
    /// Whether to include trades related to orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<bool>,
}

impl QueryOrdersRequest {
    /// Create a request for the given transaction IDs.
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            trades: None,
        }
    }
}

/// Order information.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Referral order transaction ID.
    #[serde(default)]
    pub refid: Option<String>,
    /// User reference ID.
    #[serde(default)]
    pub userref: Option<i64>,
    /// Status of order.
    pub status: OrderStatus,
    /// Open timestamp.
    pub opentm: f64,
    /// Start timestamp.
    #[serde(default)]
    pub starttm: Option<f64>,
    /// Expiration timestamp.
    #[serde(default)]
    pub expiretm: Option<f64>,
    /// Close timestamp (closed orders only).
    #[serde(default)]
    pub closetm: Option<f64>,
    /// Order description.
    pub descr: OrderDescription,
    /// Volume of order.
    pub vol: Decimal,
    /// Volume executed.
    pub vol_exec: Decimal,
    /// Total cost.
    pub cost: Decimal,
    /// Total fee.
    pub fee: Decimal,
    /// Average price.
    pub price: Decimal,
    /// Stop price.
    #[serde(default)]
    pub stopprice: Option<Decimal>,
    /// Miscellaneous info.
    #[serde(default)]
    pub misc: String,
    /// Order flags.
    #[serde(default)]
    pub oflags: String,
    /// List of trade IDs related to the order.
    #[serde(default)]
    pub trades: Vec<String>,
    /// Reason for closure (closed orders only).
    #[serde(default)]
    pub reason: Option<String>,
}

/// Human-readable description of an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDescription {
    /// Asset pair.
    pub pair: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: BuySell,
    /// Order type.
    pub ordertype: OrderType,
    /// Primary price.
    pub price: Decimal,
    /// Secondary price.
    #[serde(default)]
    pub price2: Option<Decimal>,
    /// Leverage.
    #[serde(default)]
    pub leverage: Option<String>,
    /// Order description.
    #[serde(default)]
    pub order: String,
    /// Conditional close order description.
    #[serde(default)]
    pub close: Option<String>,
}

/// Request parameters for trades history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradesHistoryRequest {
    /// Type of trade: "all", "any position", "closed position",
    /// "closing position", or "no position".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trade_type: Option<String>,
    /// Whether to include trades related to position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<bool>,
    /// Starting unix timestamp or trade transaction ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Ending unix timestamp or trade transaction ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Result offset for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ofs: Option<i64>,
}

/// Trades history response.
#[derive(Debug, Clone, Deserialize)]
pub struct TradesHistory {
    /// Trades keyed by trade transaction ID.
    pub trades: HashMap<String, TradeInfo>,
    /// Number of trades matching the criteria.
    #[serde(default)]
    pub count: i64,
}

/// Request parameters for querying specific trades.
#[derive(Debug, Clone, Serialize)]
pub struct QueryTradesRequest {
    /// Comma-separated list of transaction IDs (max 20).
    pub txid: String,
    /// Whether to include trades related to position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<bool>,
}

impl QueryTradesRequest {
    /// Create a request for the given transaction IDs.
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            trades: None,
        }
    }
}

/// Executed trade information.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeInfo {
    /// Order transaction ID.
    pub ordertxid: String,
    /// Asset pair.
    pub pair: String,
    /// Trade timestamp.
    pub time: f64,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: BuySell,
    /// Order type.
    pub ordertype: OrderType,
    /// Average price the order was executed at.
    pub price: Decimal,
    /// Total cost of the order.
    pub cost: Decimal,
    /// Total fee.
    pub fee: Decimal,
    /// Volume.
    pub vol: Decimal,
    /// Initial margin.
    #[serde(default)]
    pub margin: Option<Decimal>,
    /// Miscellaneous info.
    #[serde(default)]
    pub misc: String,
    /// Position status ("open"/"closed"), margin trades only.
    #[serde(default)]
    pub posstatus: Option<String>,
}

/// Request parameters for open positions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenPositionsRequest {
    /// Comma-separated list of transaction IDs to restrict output to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    /// Whether to include P&L calculations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docalcs: Option<bool>,
}

/// Open margin position.
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    /// Order transaction ID responsible for the position.
    pub ordertxid: String,
    /// Position status.
    #[serde(default)]
    pub posstatus: Option<String>,
    /// Asset pair.
    pub pair: String,
    /// Position open timestamp.
    pub time: f64,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: BuySell,
    /// Order type used to open the position.
    pub ordertype: OrderType,
    /// Opening cost (in quote currency).
    pub cost: Decimal,
    /// Opening fee (in quote currency).
    pub fee: Decimal,
    /// Position opening size (in base currency).
    pub vol: Decimal,
    /// Quantity closed (in base currency).
    #[serde(default)]
    pub vol_closed: Decimal,
    /// Initial margin (in quote currency).
    pub margin: Decimal,
    /// Current value of remaining position (if docalcs requested).
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Unrealized P&L of remaining position (if docalcs requested).
    #[serde(default)]
    pub net: Option<Decimal>,
    /// Funding cost and term of the position.
    #[serde(default)]
    pub terms: Option<String>,
    /// Timestamp of the next margin rollover fee.
    #[serde(default)]
    pub rollovertm: Option<String>,
    /// Miscellaneous info.
    #[serde(default)]
    pub misc: String,
    /// Order flags.
    #[serde(default)]
    pub oflags: String,
}

/// Request parameters for ledgers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgersRequest {
    /// Asset class (default: "currency").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aclass: Option<String>,
    /// Comma-separated list of assets to restrict output to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Type of ledger entry: "all", "deposit", "withdrawal", "trade", or "margin".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    /// Starting unix timestamp or ledger ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Ending unix timestamp or ledger ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Result offset for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ofs: Option<i64>,
}

/// Ledgers response.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgersInfo {
    /// Ledger entries keyed by ledger ID.
    pub ledger: HashMap<String, LedgerEntry>,
    /// Number of entries matching the criteria.
    #[serde(default)]
    pub count: i64,
}

/// Request parameters for querying specific ledger entries.
#[derive(Debug, Clone, Serialize)]
pub struct QueryLedgersRequest {
    /// Comma-separated list of ledger IDs (max 20).
    pub id: String,
}

impl QueryLedgersRequest {
    /// Create a request for the given ledger IDs.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Single ledger entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntry {
    /// Reference ID.
    pub refid: String,
    /// Entry timestamp.
    pub time: f64,
    /// Type of ledger entry.
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Asset class.
    pub aclass: String,
    /// Asset.
    pub asset: String,
    /// Transaction amount.
    pub amount: Decimal,
    /// Transaction fee.
    pub fee: Decimal,
    /// Resulting balance.
    pub balance: Decimal,
}

/// Request parameters for trade volume.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradeVolumeRequest {
    /// Comma-separated list of pairs to get fee info for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Whether to include fee info in the response.
    #[serde(rename = "fee-info", skip_serializing_if = "Option::is_none")]
    pub fee_info: Option<bool>,
}

impl TradeVolumeRequest {
    /// Create a request for fee info on specific pairs.
    pub fn for_pairs(pairs: impl Into<String>) -> Self {
        Self {
            pair: Some(pairs.into()),
            fee_info: Some(true),
        }
    }
}

/// Trade volume response.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeVolume {
    /// Volume currency.
    pub currency: String,
    /// Current discount volume.
    pub volume: Decimal,
    /// Taker fee tier info keyed by pair.
    #[serde(default)]
    pub fees: Option<HashMap<String, FeeInfo>>,
    /// Maker fee tier info keyed by pair.
    #[serde(default)]
    pub fees_maker: Option<HashMap<String, FeeInfo>>,
}

/// Fee tier information for a pair.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeInfo {
    /// Current fee (in percent).
    pub fee: Decimal,
    /// Minimum fee for the pair.
    #[serde(default)]
    pub minfee: Option<Decimal>,
    /// Maximum fee for the pair.
    #[serde(default)]
    pub maxfee: Option<Decimal>,
    /// Next tier's fee.
    #[serde(default)]
    pub nextfee: Option<Decimal>,
    /// Volume level of next tier.
    #[serde(default)]
    pub nextvolume: Option<Decimal>,
    /// Volume level of current tier.
    #[serde(default)]
    pub tiervolume: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_balance_short_field_names() {
        let json = r#"{
            "eb":"3224744.0162","tb":"3224744.0162","m":"0.0000",
            "n":"0.0000","c":"0.0000","v":"0.0000",
            "e":"3224744.0162","mf":"3224744.0162"
        }"#;
        let balance: TradeBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.equivalent_balance, "3224744.0162".parse().unwrap());
        assert_eq!(balance.margin_level, None);
    }

    #[test]
    fn test_order_decode() {
        let json = r#"{
            "refid":null,"userref":0,"status":"open","opentm":1616665496.7808,
            "starttm":0,"expiretm":0,
            "descr":{
                "pair":"XBTUSDT","type":"buy","ordertype":"limit",
                "price":"37500.0","price2":"0","leverage":"none",
                "order":"buy 0.00100000 XBTUSDT @ limit 37500.0","close":""
            },
            "vol":"0.00100000","vol_exec":"0.00000000","cost":"0.00000",
            "fee":"0.00000","price":"0.00000","stopprice":"0.00000",
            "misc":"","oflags":"fciq"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.descr.side, BuySell::Buy);
        assert_eq!(order.descr.ordertype, OrderType::Limit);
        assert_eq!(order.vol, "0.00100000".parse().unwrap());
    }

    #[test]
    fn test_ledger_entry_decode() {
        let json = r#"{
            "refid":"TJKLOE-RELLO-FV6XPW","time":1520103488.3791,"type":"trade",
            "aclass":"currency","asset":"XXBT","amount":"0.1000000000",
            "fee":"0.0000000000","balance":"0.2000000000"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.entry_type, "trade");
        assert_eq!(entry.asset, "XXBT");
    }

    #[test]
    fn test_request_skips_unset_fields() {
        let request = ClosedOrdersRequest {
            start: Some(1616663618),
            ..Default::default()
        };
        let encoded = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(encoded, "start=1616663618");
    }
}
