use std::time::Duration;

use stocks_store::{Range, StockStore, StocksClient};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    stocks_store::init_tracing_for_tests();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "AAPL".to_string());
    let base = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/api/".to_string());

    let client = StocksClient::builder()
        .base_url(Url::parse(&base)?)
        .timeout(Duration::from_secs(10))
        .build()?;
    let store = StockStore::new(&client);

    // Print every state transition, the way a UI would re-render.
    let mut rx = store.subscribe();
    let watcher = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            println!(
                "[{}/{}] loading={} points={} error={}",
                state.selected_symbol,
                state.selected_range,
                state.is_loading,
                state.series.len(),
                state.last_error.map(|e| e.to_string()).unwrap_or_default(),
            );
        }
    });

    println!("=== Fetching {symbol} ({}) ===", Range::Month);
    store.fetch_stock_data(symbol.as_str(), Range::Month).await;
    if let Some(last) = store.series().last() {
        println!("   last close on {}: {:.2} (volume {})", last.date, last.close, last.volume);
    }

    println!("=== Refreshing {symbol} ===");
    store.refresh_stock_data().await;
    match store.last_error_message() {
        Some(msg) => println!("   refresh failed: {msg}"),
        None => println!("   {} points after refresh", store.series().len()),
    }

    drop(store);
    watcher.await?;
    Ok(())
}
