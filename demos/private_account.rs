//! Example: Private account endpoints.
//!
//! Requires KRAKEN_API_KEY and KRAKEN_API_SECRET in the environment.
//!
//! Run with: cargo run --example private_account

use std::sync::Arc;

use kraken_rest_client::auth::EnvCredentials;
use kraken_rest_client::rest::KrakenRestClient;
use kraken_rest_client::rest::private::{LedgersRequest, TradeBalanceRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set KRAKEN_API_KEY and KRAKEN_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = KrakenRestClient::builder().credentials(credentials).build();

    let balances = client.get_account_balance().await?;
    for (asset, amount) in &balances {
        println!("{asset}: {amount}");
    }

    let trade_balance = client
        .get_trade_balance(Some(&TradeBalanceRequest::for_asset("ZUSD")))
        .await?;
    println!("Equity: {}", trade_balance.equity);
    println!("Free margin: {}", trade_balance.free_margin);

    let open_orders = client.get_open_orders(None).await?;
    println!("Open orders: {}", open_orders.open.len());

    let ledgers = client
        .get_ledgers(Some(&LedgersRequest {
            asset: Some("XXBT".to_string()),
            ..Default::default()
        }))
        .await?;
    println!("Ledger entries: {} of {}", ledgers.ledger.len(), ledgers.count);

    Ok(())
}
