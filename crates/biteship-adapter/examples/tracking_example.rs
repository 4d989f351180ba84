/*
[INPUT]:  BITESHIP_API_KEY, waybill id and courier code from the command line
[OUTPUT]: Tracking status and history of one shipment
[POS]:    Examples - shipment tracking
[UPDATE]: When the tracking endpoints change
*/

use biteship_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: track a shipment by waybill
///
/// Usage: `cargo run --example tracking_example -- <waybill_id> <courier_code>`
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(waybill_id), Some(courier_code)) = (args.next(), args.next()) else {
        eprintln!("Usage: tracking_example <waybill_id> <courier_code>");
        return;
    };

    println!("=== Biteship Tracking Example ===\n");

    let biteship = match Biteship::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match biteship.tracking.get_by_waybill(&waybill_id, &courier_code).await {
        Ok(TrackingResponse { tracking: Some(tracking), .. }) => {
            println!("✓ {} via {}: {}", waybill_id, tracking.courier.name, tracking.status);
            for entry in &tracking.history {
                println!("  [{}] {} {}", entry.timestamp, entry.status, entry.note.as_deref().unwrap_or(""));
            }
        }
        Ok(_) => println!("✓ No tracking data yet"),
        Err(e) if e.is_not_found() => println!("✗ Waybill not registered yet: {}", e.message()),
        Err(e) => println!("✗ Error: {}", e),
    }
}
