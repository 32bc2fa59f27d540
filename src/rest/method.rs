//! Enum-keyed registry of Kraken REST API endpoints.

/// Whether an endpoint requires signed authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// No authentication required.
    Public,
    /// Requires an API key and a signed request.
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// A Kraken REST API endpoint.
///
/// Each variant resolves to a request path of the form
/// `/{version}/{public|private}/{segment}` via [`KrakenApiMethod::url_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KrakenApiMethod {
    /// Get server time.
    ServerTime,
    /// Get asset info.
    AssetInformation,
    /// Get tradable asset pairs.
    AssetPairs,
    /// Get ticker information.
    TickerInformation,
    /// Get OHLC data (cursor-bearing).
    Ohlc,
    /// Get order book.
    OrderBook,
    /// Get recent trades (cursor-bearing).
    RecentTrades,
    /// Get recent spreads (cursor-bearing).
    RecentSpreads,
    /// Get account balance.
    AccountBalance,
    /// Get trade balance.
    TradeBalance,
    /// Get open orders.
    OpenOrders,
    /// Get closed orders.
    ClosedOrders,
    /// Query orders info.
    OrdersInformation,
    /// Get trades history.
    TradesHistory,
    /// Query trades info.
    TradesInformation,
    /// Get open positions.
    OpenPositions,
    /// Get ledgers.
    LedgersInformation,
    /// Query ledgers.
    QueryLedgers,
    /// Get trade volume.
    TradeVolume,
}

impl KrakenApiMethod {
    /// The trailing path segment Kraken uses for this endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            KrakenApiMethod::ServerTime => "Time",
            KrakenApiMethod::AssetInformation => "Assets",
            KrakenApiMethod::AssetPairs => "AssetPairs",
            KrakenApiMethod::TickerInformation => "Ticker",
            KrakenApiMethod::Ohlc => "OHLC",
            KrakenApiMethod::OrderBook => "Depth",
            KrakenApiMethod::RecentTrades => "Trades",
            KrakenApiMethod::RecentSpreads => "Spread",
            KrakenApiMethod::AccountBalance => "Balance",
            KrakenApiMethod::TradeBalance => "TradeBalance",
            KrakenApiMethod::OpenOrders => "OpenOrders",
            KrakenApiMethod::ClosedOrders => "ClosedOrders",
            KrakenApiMethod::OrdersInformation => "QueryOrders",
            KrakenApiMethod::TradesHistory => "TradesHistory",
            KrakenApiMethod::TradesInformation => "QueryTrades",
            KrakenApiMethod::OpenPositions => "OpenPositions",
            KrakenApiMethod::LedgersInformation => "Ledgers",
            KrakenApiMethod::QueryLedgers => "QueryLedgers",
            KrakenApiMethod::TradeVolume => "TradeVolume",
        }
    }

    /// Whether the endpoint is public or requires signing.
    pub fn visibility(&self) -> Visibility {
        match self {
            KrakenApiMethod::ServerTime
            | KrakenApiMethod::AssetInformation
            | KrakenApiMethod::AssetPairs
            | KrakenApiMethod::TickerInformation
            | KrakenApiMethod::Ohlc
            | KrakenApiMethod::OrderBook
            | KrakenApiMethod::RecentTrades
            | KrakenApiMethod::RecentSpreads => Visibility::Public,
            _ => Visibility::Private,
        }
    }

    /// Whether the endpoint requires signed authentication.
    pub fn is_private(&self) -> bool {
        self.visibility() == Visibility::Private
    }

    /// Resolve the full request path for a given API version.
    pub fn url_path(&self, version: u32) -> String {
        format!("/{}/{}/{}", version, self.visibility(), self.path_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_path() {
        assert_eq!(KrakenApiMethod::ServerTime.url_path(0), "/0/public/Time");
        assert_eq!(KrakenApiMethod::Ohlc.url_path(0), "/0/public/OHLC");
        assert_eq!(KrakenApiMethod::OrderBook.url_path(0), "/0/public/Depth");
    }

    #[test]
    fn test_private_url_path() {
        assert_eq!(
            KrakenApiMethod::AccountBalance.url_path(0),
            "/0/private/Balance"
        );
        assert_eq!(
            KrakenApiMethod::TradesInformation.url_path(0),
            "/0/private/QueryTrades"
        );
        assert!(KrakenApiMethod::AccountBalance.is_private());
        assert!(!KrakenApiMethod::TickerInformation.is_private());
    }

    #[test]
    fn test_version_prefix() {
        assert_eq!(KrakenApiMethod::ServerTime.url_path(2), "/2/public/Time");
    }
}
