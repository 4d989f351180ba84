/*
[INPUT]:  BITESHIP_API_KEY in the environment (use a test key)
[OUTPUT]: A draft order, its rates, and the confirmed order
[POS]:    Examples - draft order to order workflow
[UPDATE]: When the draft order or order endpoints change
*/

use biteship_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: draft a shipment, price it, confirm it, then cancel it
///
/// Creates real resources; point it at a sandbox key.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Biteship Order Example ===\n");

    let biteship = match Biteship::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let draft = CreateDraftOrderRequest {
        shipment: ShipmentDetails {
            origin_contact_name: "Gudang Kebayoran".to_string(),
            origin_contact_phone: "081234567890".to_string(),
            origin_address: "Jl. Senopati No. 1".to_string(),
            origin_postal_code: Some(12190),
            destination_contact_name: "Budi".to_string(),
            destination_contact_phone: "088888888888".to_string(),
            destination_address: "Jl. Thamrin No. 10".to_string(),
            destination_postal_code: Some(10350),
            delivery_type: Some(DeliveryType::Now),
            items: vec![Item {
                name: "Kaos".to_string(),
                description: None,
                category: Some("fashion".to_string()),
                value: 120000,
                quantity: 2,
                length: 20,
                width: 15,
                height: 5,
                weight: 400,
            }],
            ..ShipmentDetails::default()
        },
        ..CreateDraftOrderRequest::default()
    };

    let draft_id = match biteship.draft_orders.create(&draft).await {
        Ok(response) => {
            println!("✓ Draft order {} ({:?})", response.draft_order.id, response.draft_order.status);
            response.draft_order.id
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    match biteship.draft_orders.get_rates(&draft_id).await {
        Ok(response) => println!("✓ {} rate options", response.pricing.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    let update = UpdateDraftOrderRequest {
        courier_company: Some("jne".to_string()),
        courier_type: Some("reg".to_string()),
        ..UpdateDraftOrderRequest::default()
    };
    if let Err(e) = biteship.draft_orders.update(&draft_id, &update).await {
        println!("✗ Error: {}", e);
        return;
    }

    let order_id = match biteship.draft_orders.confirm(&draft_id).await {
        Ok(response) => response.draft_order.order_id,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    if let Some(order_id) = order_id {
        println!("✓ Confirmed as order {}", order_id);
        match biteship.orders.cancel(&order_id).await {
            Ok(response) => println!("✓ Cancelled: {:?}", response.message),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Order example complete");
}
