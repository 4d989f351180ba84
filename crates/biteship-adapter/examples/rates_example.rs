/*
[INPUT]:  BITESHIP_API_KEY (and optional BITESHIP_BASE_URL) in the environment
[OUTPUT]: Available couriers and shipping rates between two postal codes
[POS]:    Examples - courier discovery and pricing
[UPDATE]: When the rates or couriers endpoints change
*/

use biteship_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: list couriers, then price a small parcel
///
/// Run with `RUST_LOG=biteship_adapter=debug` to see the request log.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Biteship Rates Example ===\n");

    let biteship = match Biteship::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", biteship.base_url());

    println!("Listing couriers...");
    match biteship.couriers.list().await {
        Ok(response) => {
            for courier in response.couriers.iter().take(5) {
                println!(
                    "  {} / {} ({})",
                    courier.courier_name, courier.courier_service_name, courier.service_type
                );
            }
            println!("✓ {} courier services", response.couriers.len());
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let item = Item {
        name: "Sepatu".to_string(),
        description: Some("Sepatu lari".to_string()),
        category: None,
        value: 250000,
        quantity: 1,
        length: 30,
        width: 20,
        height: 12,
        weight: 900,
    };
    let request = RatesRequest::by_postal_code(12530, 10110, "jne,sicepat", vec![item]);

    println!("\nPricing 12530 -> 10110...");
    match biteship.rates.get_rates(&request).await {
        Ok(response) => {
            for rate in &response.pricing {
                println!(
                    "  {} {}: {} {}",
                    rate.courier.company, rate.courier.service_type, rate.courier.amount, rate.courier.currency
                );
            }
        }
        Err(e) => println!("✗ Error (status {}): {}", e.status(), e.message()),
    }

    println!("\n✓ Rates example complete");
}
