//! Types for public REST API endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::OhlcInterval;

/// Server time response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp.
    pub unixtime: i64,
    /// RFC 1123 formatted time string.
    pub rfc1123: String,
}

/// Request parameters for asset info.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetInfoRequest {
    /// Comma-separated list of assets to get info for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Asset class (default: "currency").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aclass: Option<String>,
}

impl AssetInfoRequest {
    /// Create a new request for specific assets.
    pub fn for_assets(assets: impl Into<String>) -> Self {
        Self {
            asset: Some(assets.into()),
            aclass: None,
        }
    }
}

/// Asset information.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInfo {
    /// Asset class.
    pub aclass: String,
    /// Alternate name.
    pub altname: String,
    /// Number of decimals.
    pub decimals: u8,
    /// Display decimals.
    pub display_decimals: u8,
    /// Asset status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Request parameters for asset pairs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetPairsRequest {
    /// Comma-separated list of pairs to get info for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    /// Info level: "info" (default), "leverage", "fees", or "margin".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl AssetPairsRequest {
    /// Create a new request for specific pairs.
    pub fn for_pairs(pairs: impl Into<String>) -> Self {
        Self {
            pair: Some(pairs.into()),
            info: None,
        }
    }
}

/// Tradable asset pair information.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPair {
    /// Alternate pair name.
    pub altname: String,
    /// WebSocket pair name.
    #[serde(default)]
    pub wsname: Option<String>,
    /// Asset class of base component.
    pub aclass_base: String,
    /// Base asset.
    pub base: String,
    /// Asset class of quote component.
    pub aclass_quote: String,
    /// Quote asset.
    pub quote: String,
    /// Scaling decimal places for pair.
    pub pair_decimals: u8,
    /// Scaling decimal places for volume.
    pub lot_decimals: u8,
    /// Amount to multiply lot volume by to get currency volume.
    pub lot_multiplier: u32,
    /// Array of leverage amounts available when buying.
    #[serde(default)]
    pub leverage_buy: Vec<u32>,
    /// Array of leverage amounts available when selling.
    #[serde(default)]
    pub leverage_sell: Vec<u32>,
    /// Fee schedule array as [volume, percent fee] tuples.
    #[serde(default)]
    pub fees: Vec<(u64, Decimal)>,
    /// Maker fee schedule array.
    #[serde(default)]
    pub fees_maker: Option<Vec<(u64, Decimal)>>,
    /// Volume discount currency.
    #[serde(default)]
    pub fee_volume_currency: Option<String>,
    /// Margin call level.
    #[serde(default)]
    pub margin_call: Option<u32>,
    /// Stop-out/liquidation margin level.
    #[serde(default)]
    pub margin_stop: Option<u32>,
    /// Minimum order size.
    #[serde(default)]
    pub ordermin: Option<Decimal>,
}

/// Ticker information.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerInfo {
    /// Ask price [price, whole lot volume, lot volume].
    pub a: Vec<Decimal>,
    /// Bid price [price, whole lot volume, lot volume].
    pub b: Vec<Decimal>,
    /// Last trade closed [price, lot volume].
    pub c: Vec<Decimal>,
    /// Volume [today, last 24 hours].
    pub v: Vec<Decimal>,
    /// Volume weighted average price [today, last 24 hours].
    pub p: Vec<Decimal>,
    /// Number of trades [today, last 24 hours].
    pub t: Vec<u64>,
    /// Low [today, last 24 hours].
    pub l: Vec<Decimal>,
    /// High [today, last 24 hours].
    pub h: Vec<Decimal>,
    /// Today's opening price.
    pub o: Decimal,
}

impl TickerInfo {
    /// Get the current ask price.
    pub fn ask_price(&self) -> Decimal {
        self.a.first().copied().unwrap_or_default()
    }

    /// Get the current bid price.
    pub fn bid_price(&self) -> Decimal {
        self.b.first().copied().unwrap_or_default()
    }

    /// Get the last trade price.
    pub fn last_price(&self) -> Decimal {
        self.c.first().copied().unwrap_or_default()
    }
}

/// Request parameters for OHLC data.
#[derive(Debug, Clone, Serialize)]
pub struct OhlcRequest {
    /// Asset pair.
    pub pair: String,
    /// Time frame interval in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<OhlcInterval>,
    /// Return data since given cursor ("last" from a previous response).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

impl OhlcRequest {
    /// Create a new OHLC request for a pair.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            interval: None,
            since: None,
        }
    }

    /// Set the interval.
    pub fn interval(mut self, interval: OhlcInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the since cursor.
    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
}

/// OHLC rows keyed by pair name.
pub type OhlcData = HashMap<String, Vec<OhlcEntry>>;

/// Single OHLC entry.
/// Format: [time, open, high, low, close, vwap, volume, count]
#[derive(Debug, Clone)]
pub struct OhlcEntry {
    /// Unix timestamp.
    pub time: i64,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Volume weighted average price.
    pub vwap: Decimal,
    /// Volume.
    pub volume: Decimal,
    /// Number of trades.
    pub count: u64,
}

impl<'de> Deserialize<'de> for OhlcEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (
            i64,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            Decimal,
            u64,
        ) = Deserialize::deserialize(deserializer)?;
        Ok(OhlcEntry {
            time: arr.0,
            open: arr.1,
            high: arr.2,
            low: arr.3,
            close: arr.4,
            vwap: arr.5,
            volume: arr.6,
            count: arr.7,
        })
    }
}

/// Request parameters for order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Asset pair.
    pub pair: String,
    /// Maximum number of asks/bids (default: 100, max: 500).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u16>,
}

impl OrderBookRequest {
    /// Create a new order book request.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            count: None,
        }
    }

    /// Set the depth count.
    pub fn count(mut self, count: u16) -> Self {
        self.count = Some(count.min(500));
        self
    }
}

/// Order book data.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Ask side entries.
    pub asks: Vec<OrderBookEntry>,
    /// Bid side entries.
    pub bids: Vec<OrderBookEntry>,
}

/// Single order book entry.
/// Format: [price, volume, timestamp]
#[derive(Debug, Clone)]
pub struct OrderBookEntry {
    /// Price level.
    pub price: Decimal,
    /// Volume at price level.
    pub volume: Decimal,
    /// Timestamp.
    pub timestamp: i64,
}

impl<'de> Deserialize<'de> for OrderBookEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (Decimal, Decimal, i64) = Deserialize::deserialize(deserializer)?;
        Ok(OrderBookEntry {
            price: arr.0,
            volume: arr.1,
            timestamp: arr.2,
        })
    }
}

/// Request parameters for recent trades.
#[derive(Debug, Clone, Serialize)]
pub struct RecentTradesRequest {
    /// Asset pair.
    pub pair: String,
    /// Return data since given cursor ("last" from a previous response).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

impl RecentTradesRequest {
    /// Create a new recent trades request.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            since: None,
        }
    }

    /// Set the since cursor.
    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
}

/// Trade rows keyed by pair name.
pub type RecentTradesData = HashMap<String, Vec<TradeEntry>>;

/// Single trade entry.
/// Format: [price, volume, time, buy/sell, market/limit, misc, (trade_id)]
#[derive(Debug, Clone)]
pub struct TradeEntry {
    /// Trade price.
    pub price: Decimal,
    /// Trade volume.
    pub volume: Decimal,
    /// Trade timestamp.
    pub time: f64,
    /// Buy or sell ("b"/"s").
    pub side: String,
    /// Market or limit ("m"/"l").
    pub order_type: String,
    /// Miscellaneous.
    pub misc: String,
    /// Trade ID; newer API revisions append it, older ones do not.
    pub trade_id: Option<i64>,
}

impl<'de> Deserialize<'de> for TradeEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TradeEntryVisitor;

        impl<'de> serde::de::Visitor<'de> for TradeEntryVisitor {
            type Value = TradeEntry;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a trade array [price, volume, time, side, type, misc, ..]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                use serde::de::Error;

                let price = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(0, &"price"))?;
                let volume = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(1, &"volume"))?;
                let time = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(2, &"time"))?;
                let side = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(3, &"side"))?;
                let order_type = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(4, &"order type"))?;
                let misc = seq
                    .next_element()?
                    .ok_or_else(|| A::Error::invalid_length(5, &"misc"))?;
                let trade_id = seq.next_element()?;

                // Ignore any further elements the API may add.
                while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}

                Ok(TradeEntry {
                    price,
                    volume,
                    time,
                    side,
                    order_type,
                    misc,
                    trade_id,
                })
            }
        }

        deserializer.deserialize_seq(TradeEntryVisitor)
    }
}

/// Request parameters for recent spreads.
#[derive(Debug, Clone, Serialize)]
pub struct RecentSpreadsRequest {
    /// Asset pair.
    pub pair: String,
    /// Return data since given cursor ("last" from a previous response).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
}

impl RecentSpreadsRequest {
    /// Create a new recent spreads request.
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            since: None,
        }
    }

    /// Set the since cursor.
    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }
}

/// Spread rows keyed by pair name.
pub type RecentSpreadsData = HashMap<String, Vec<SpreadEntry>>;

/// Single spread entry.
/// Format: [time, bid, ask]
#[derive(Debug, Clone)]
pub struct SpreadEntry {
    /// Unix timestamp.
    pub time: i64,
    /// Bid price.
    pub bid: Decimal,
    /// Ask price.
    pub ask: Decimal,
}

impl<'de> Deserialize<'de> for SpreadEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, Decimal, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(SpreadEntry {
            time: arr.0,
            bid: arr.1,
            ask: arr.2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ohlc_entry_from_array() {
        let json = r#"[1616662740,"52591.9","52599.9","52591.8","52599.9","52599.1","0.11091626",5]"#;
        let entry: OhlcEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.time, 1616662740);
        assert_eq!(entry.open, "52591.9".parse().unwrap());
        assert_eq!(entry.count, 5);
    }

    #[test]
    fn test_trade_entry_without_trade_id() {
        let json = r#"["50000.1","0.5",1616663618.0,"b","l",""]"#;
        let entry: TradeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.side, "b");
        assert!(entry.trade_id.is_none());
    }

    #[test]
    fn test_trade_entry_with_trade_id() {
        let json = r#"["50000.1","0.5",1616663618.0,"s","m","",12345]"#;
        let entry: TradeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.order_type, "m");
        assert_eq!(entry.trade_id, Some(12345));
    }

    #[test]
    fn test_spread_entry_from_array() {
        let json = r#"[1548122302,"3538.70000","3541.50000"]"#;
        let entry: SpreadEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.time, 1548122302);
        assert_eq!(entry.bid, "3538.70000".parse().unwrap());
    }

    #[test]
    fn test_ticker_info_helpers() {
        let json = r#"{
            "a":["52609.60000","1","1.000"],
            "b":["52609.50000","1","1.000"],
            "c":["52641.10000","0.00080000"],
            "v":["1920.83610601","7954.00219674"],
            "p":["52389.94668","54022.90683"],
            "t":[23329,80463],
            "l":["51513.90000","51513.90000"],
            "h":["53219.90000","57200.00000"],
            "o":"52280.40000"
        }"#;
        let info: TickerInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.ask_price(), "52609.60000".parse().unwrap());
        assert_eq!(info.bid_price(), "52609.50000".parse().unwrap());
        assert_eq!(info.last_price(), "52641.10000".parse().unwrap());
    }
}
