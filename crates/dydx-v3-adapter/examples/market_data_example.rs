/*
[INPUT]:  Market identifier (e.g., "BTC-USD")
[OUTPUT]: Markets, orderbook, statistics, trades and funding printed to stdout
[POS]:    Examples - public market data queries
[UPDATE]: When adding new public endpoints
*/

use dydx_v3_adapter::*;

/// Example: Query market data (no signer required)
#[tokio::main]
async fn main() {
    println!("=== dYdX v3 Market Data Example ===\n");

    let client = match DydxClient::new(ClientConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let public = client.public();
    println!("✓ Public client created for {}\n", public.host());

    let market = "BTC-USD";

    println!("Querying market {}...", market);
    match public.get_markets(Some(market)).await {
        Ok(response) => {
            if let Some(info) = response.markets.get(market) {
                println!("✓ Oracle price: {}, index price: {}", info.oracle_price, info.index_price);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying orderbook for {}...", market);
    match public.get_order_book(market).await {
        Ok(response) => println!(
            "✓ {} bids / {} asks",
            response.orderbook.bids.len(),
            response.orderbook.asks.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 7-day statistics for {}...", market);
    let stats = GetStatsParams {
        market: market.to_string(),
        days: Some(MarketStatisticDay::Seven),
    };
    match public.get_stats(&stats).await {
        Ok(response) => println!("✓ Stats: {:?}", response.markets.get(market)),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades for {}...", market);
    match public.get_trades(&GetTradesParams::new(market)).await {
        Ok(response) => println!("✓ {} trades", response.trades.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying historical funding for {}...", market);
    match public
        .get_historical_funding(&GetHistoricalFundingParams::new(market))
        .await
    {
        Ok(response) => println!("✓ {} funding entries", response.historical_funding.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
