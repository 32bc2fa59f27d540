use std::sync::Arc;

use kraken_rest_client::auth::EnvCredentials;
use kraken_rest_client::rest::KrakenRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("KRAKEN_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = KrakenRestClient::new();

    let time = client.get_server_time().await?;
    assert!(time.unixtime > 0);

    let tickers = client.get_ticker("XBTUSD").await?;
    assert!(!tickers.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = KrakenRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let _balances = client.get_account_balance().await?;
    let trade_balance = client.get_trade_balance(None).await?;
    assert!(trade_balance.equity >= rust_decimal::Decimal::ZERO);

    Ok(())
}
