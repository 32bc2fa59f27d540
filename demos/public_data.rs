//! Example: Public market data endpoints.
//!
//! Run with: cargo run --example public_data

use kraken_rest_client::rest::KrakenRestClient;
use kraken_rest_client::rest::public::{OhlcRequest, OrderBookRequest, RecentTradesRequest};
use kraken_rest_client::types::OhlcInterval;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = KrakenRestClient::new();

    let time = client.get_server_time().await?;
    println!("Server time: {} ({})", time.unixtime, time.rfc1123);

    let tickers = client.get_ticker("XBTUSD,ETHUSD").await?;
    for (pair, ticker) in &tickers {
        println!(
            "{pair}: last={} ask={} bid={}",
            ticker.last_price(),
            ticker.ask_price(),
            ticker.bid_price()
        );
    }

    let ohlc_request = OhlcRequest::new("XBTUSD").interval(OhlcInterval::Hour1);
    let ohlc = client.get_ohlc(&ohlc_request).await?;
    for (pair, entries) in &ohlc.data {
        println!("{pair}: {} candles, cursor for next page: {}", entries.len(), ohlc.last);
    }

    let book_request = OrderBookRequest::new("XBTUSD").count(5);
    let books = client.get_order_book(&book_request).await?;
    for (pair, book) in &books {
        println!("{pair}: {} asks / {} bids", book.asks.len(), book.bids.len());
    }

    let trades_request = RecentTradesRequest::new("XBTUSD");
    let trades = client.get_recent_trades(&trades_request).await?;
    for (pair, entries) in &trades.data {
        println!("{pair}: {} recent trades", entries.len());
    }

    Ok(())
}
