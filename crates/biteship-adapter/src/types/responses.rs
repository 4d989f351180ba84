/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::models::{ApiErrorBody, Area, Courier, DraftOrder, Location, Order, Rate, Tracking};

/// Envelopes keep every field they do not model in `other`, so a decoded
/// body serializes back to what the API sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub pricing: Vec<Rate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouriersResponse {
    pub success: bool,
    #[serde(default)]
    pub couriers: Vec<Courier>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    pub success: bool,
    #[serde(flatten)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLocationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreasResponse {
    pub success: bool,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOrderResponse {
    pub success: bool,
    #[serde(flatten)]
    pub draft_order: DraftOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(flatten)]
    pub order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Bare acknowledgement returned by delete and cancel endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocationType;
    use serde_json::json;

    #[test]
    fn test_rates_response_round_trips_unmodified() {
        let body = json!({"success": true, "pricing": []});
        let parsed: RatesResponse = serde_json::from_value(body.clone()).unwrap();

        assert!(parsed.success);
        assert!(parsed.pricing.is_empty());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_rates_response_keeps_unmodelled_fields() {
        let body = json!({
            "success": true,
            "object": "courier_pricing",
            "message": "Success to retrieve courier pricing",
            "code": 20001003,
            "origin": {"location_id": null, "postal_code": 12530},
            "destination": {"location_id": null, "postal_code": 10110},
            "pricing": [{
                "courier": {
                    "company": "jne",
                    "name": "JNE",
                    "type": "reg",
                    "rate_type": "standard",
                    "amount": 12000,
                    "currency": "IDR",
                    "estimated_days": 2,
                    "service_code": "REG19"
                },
                "origin": {"area_id": "IDNP6", "area_name": "Jakarta Selatan", "postal_code": 12530},
                "destination": {"area_id": "IDNP6", "area_name": "Jakarta Pusat", "postal_code": 10110},
                "available_for_insurance": true,
                "duration": "1 - 2 days"
            }]
        });
        let parsed: RatesResponse = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(parsed.other.get("code"), Some(&json!(20001003)));
        assert_eq!(parsed.pricing[0].courier.other.get("service_code"), Some(&json!("REG19")));
        assert_eq!(parsed.pricing[0].other.get("duration"), Some(&json!("1 - 2 days")));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_order_response_keeps_unmodelled_fields() {
        let body = json!({
            "success": true,
            "message": "Order successfully created",
            "object": "order",
            "id": "order-1",
            "origin": {
                "contact_name": "Origin",
                "contact_phone": "0811",
                "address": "Jl. Senopati 1",
                "postal_code": 12190,
                "coordinate": {"latitude": -6.2, "longitude": 106.8}
            },
            "destination": {
                "contact_name": "Destination",
                "contact_phone": "0822",
                "address": "Jl. Thamrin 10",
                "postal_code": 10350,
                "cash_on_delivery": {"amount": 150000, "amountCurrency": "IDR", "type": "7_days"},
                "proof_of_delivery": {"use": false, "fee": 0, "cashback": 0}
            },
            "courier": {
                "company": "jne",
                "type": "reg",
                "waybill_id": "WB123",
                "insurance": {"amount": 0, "fee": 0, "note": ""},
                "driver_plate_number": "B 1234 XY"
            },
            "delivery": {"type": "now", "distance": 12.5, "distance_unit": "kilometer"},
            "items": [{
                "name": "Kaos",
                "value": 120000,
                "quantity": 2,
                "length": 20,
                "width": 15,
                "height": 5,
                "weight": 400,
                "sku": "KAOS-01",
                "variant": "L"
            }],
            "price": 10000.5,
            "status": "confirmed",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "origin_note": "gate 2"
        });
        let parsed: OrderResponse = serde_json::from_value(body.clone()).unwrap();

        let order = &parsed.order;
        assert_eq!(order.other.get("origin_note"), Some(&json!("gate 2")));
        assert_eq!(order.courier.other.get("driver_plate_number"), Some(&json!("B 1234 XY")));
        assert_eq!(order.items[0].other.get("variant"), Some(&json!("L")));
        assert_eq!(order.items[0].item.name, "Kaos");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_location_response_keeps_unmodelled_fields() {
        let body = json!({
            "success": true,
            "code": 20003001,
            "id": "loc-1",
            "name": "Gudang",
            "contact_name": "Budi",
            "contact_phone": "08123456789",
            "address": "Jl. Sudirman 1",
            "postal_code": 10110,
            "type": "origin",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "area_id": "IDNP6"
        });
        let parsed: LocationResponse = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(parsed.location.other.get("area_id"), Some(&json!("IDNP6")));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }

    #[test]
    fn test_location_response_flattens_location() {
        let parsed: LocationResponse = serde_json::from_value(json!({
            "success": true,
            "id": "test-id",
            "name": "Test Location",
            "contact_name": "John Doe",
            "contact_phone": "08123456789",
            "address": "Test Address",
            "postal_code": 10110,
            "type": "origin",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert!(parsed.success);
        assert_eq!(parsed.location.id, "test-id");
        assert_eq!(parsed.location.location_type, LocationType::Origin);
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_tracking_response_without_tracking() {
        let parsed: TrackingResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(parsed.tracking.is_none());
    }

    #[test]
    fn test_success_response_round_trips_unmodified() {
        let body = json!({"success": true});
        let parsed: SuccessResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&parsed).unwrap(), body);
    }
}
