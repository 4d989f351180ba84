/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{AreaSearchType, DeliveryType, LocationType};
use super::models::{Coordinate, Item};

/// Rate lookup. Origin and destination are each located by one of area id,
/// postal code or latitude/longitude; the API decides what to do with
/// conflicting or missing locators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_postal_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_longitude: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rate_type: Option<String>,
    /// Comma separated courier codes, e.g. `"jne,sicepat"`
    pub couriers: String,
    pub items: Vec<Item>,
}

impl RatesRequest {
    pub fn by_postal_code(
        origin: u32,
        destination: u32,
        couriers: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            origin_postal_code: Some(origin),
            destination_postal_code: Some(destination),
            couriers: couriers.into(),
            items,
            ..Self::default()
        }
    }

    pub fn by_area_id(
        origin: impl Into<String>,
        destination: impl Into<String>,
        couriers: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            origin_area_id: Some(origin.into()),
            destination_area_id: Some(destination.into()),
            couriers: couriers.into(),
            items,
            ..Self::default()
        }
    }

    pub fn by_coordinate(
        origin: Coordinate,
        destination: Coordinate,
        couriers: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            origin_latitude: Some(origin.latitude),
            origin_longitude: Some(origin.longitude),
            destination_latitude: Some(destination.latitude),
            destination_longitude: Some(destination.longitude),
            couriers: couriers.into(),
            items,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub postal_code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "type")]
    pub location_type: LocationType,
}

/// Partial location update. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateLocationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Area search, sent as `?countries=..&input=..&type=..`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAreasRequest {
    /// ISO 3166 alpha-2 country code, e.g. `"ID"`
    pub countries: String,
    pub input: String,
    #[serde(rename = "type")]
    pub search_type: AreaSearchType,
}

impl GetAreasRequest {
    pub fn new(
        countries: impl Into<String>,
        input: impl Into<String>,
        search_type: AreaSearchType,
    ) -> Self {
        Self {
            countries: countries.into(),
            input: input.into(),
            search_type,
        }
    }
}

/// Shipper, origin, destination, delivery and items of a shipment.
///
/// Shared by draft order and order creation; serialized flat into the
/// request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_organization: Option<String>,
    pub origin_contact_name: String,
    pub origin_contact_phone: String,
    pub origin_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_coordinate: Option<Coordinate>,
    pub destination_contact_name: String,
    pub destination_contact_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_contact_email: Option<String>,
    pub destination_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_postal_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coordinate: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDraftOrderRequest {
    #[serde(flatten)]
    pub shipment: ShipmentDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_type: Option<String>,
    /// Insured amount in the account currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_insurance: Option<u64>,
}

/// Partial draft order update. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateDraftOrderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_insurance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper_organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_postal_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_coordinate: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_postal_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coordinate: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

/// Order creation: a shipment plus a mandatory courier selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub shipment: ShipmentDetails,
    pub courier_company: String,
    pub courier_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_insurance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_cash_on_delivery: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_cash_on_delivery_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item() -> Item {
        Item {
            name: "Test Product".to_string(),
            description: None,
            category: None,
            value: 165000,
            quantity: 1,
            length: 10,
            width: 10,
            height: 10,
            weight: 200,
        }
    }

    fn shipment() -> ShipmentDetails {
        ShipmentDetails {
            origin_contact_name: "Test Origin".to_string(),
            origin_contact_phone: "081234567890".to_string(),
            origin_address: "Test Address".to_string(),
            origin_postal_code: Some(12440),
            destination_contact_name: "Test Destination".to_string(),
            destination_contact_phone: "088888888888".to_string(),
            destination_address: "Test Destination Address".to_string(),
            destination_postal_code: Some(12950),
            delivery_type: Some(DeliveryType::Now),
            items: vec![item()],
            ..ShipmentDetails::default()
        }
    }

    #[test]
    fn test_rates_request_by_postal_code() {
        let request = RatesRequest::by_postal_code(12530, 10110, "jne,sicepat", vec![item()]);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["origin_postal_code"], 12530);
        assert_eq!(body["destination_postal_code"], 10110);
        assert_eq!(body["couriers"], "jne,sicepat");
        assert!(body.get("origin_area_id").is_none());
        assert!(body.get("origin_latitude").is_none());
        assert!(body.get("type").is_none());
    }

    #[test]
    fn test_rates_request_by_coordinate() {
        let request = RatesRequest::by_coordinate(
            Coordinate { latitude: -6.2253114, longitude: 106.7993735 },
            Coordinate { latitude: -6.28927, longitude: 106.77492 },
            "grab",
            vec![item()],
        );
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["origin_latitude"], -6.2253114);
        assert_eq!(body["destination_longitude"], 106.77492);
        assert!(body.get("origin_postal_code").is_none());
    }

    #[test]
    fn test_rates_request_by_area_id() {
        let request = RatesRequest::by_area_id("IDNP6", "IDNP10", "jne", vec![item()]);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["origin_area_id"], "IDNP6");
        assert_eq!(body["destination_area_id"], "IDNP10");
    }

    #[test]
    fn test_update_location_rejects_unknown_fields() {
        let parsed: Result<UpdateLocationRequest, _> =
            serde_json::from_value(json!({"name": "Gudang", "color": "blue"}));
        assert!(parsed.is_err());

        let parsed: UpdateLocationRequest =
            serde_json::from_value(json!({"name": "Gudang"})).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Gudang"));
    }

    #[test]
    fn test_update_location_sends_only_set_fields() {
        let request = UpdateLocationRequest {
            name: Some("Updated Location".to_string()),
            ..UpdateLocationRequest::default()
        };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"name": "Updated Location"}));
    }

    #[test]
    fn test_update_draft_order_rejects_unknown_fields() {
        let parsed: Result<UpdateDraftOrderRequest, _> =
            serde_json::from_value(json!({"courier_company": "jne", "surprise": true}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_order_request_is_flat() {
        let request = CreateOrderRequest {
            shipment: shipment(),
            courier_company: "jne".to_string(),
            courier_type: "reg".to_string(),
            courier_insurance: None,
            destination_cash_on_delivery: None,
            destination_cash_on_delivery_type: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "origin_contact_name": "Test Origin",
                "origin_contact_phone": "081234567890",
                "origin_address": "Test Address",
                "origin_postal_code": 12440,
                "destination_contact_name": "Test Destination",
                "destination_contact_phone": "088888888888",
                "destination_address": "Test Destination Address",
                "destination_postal_code": 12950,
                "courier_company": "jne",
                "courier_type": "reg",
                "delivery_type": "now",
                "items": [{
                    "name": "Test Product",
                    "value": 165000,
                    "quantity": 1,
                    "height": 10,
                    "length": 10,
                    "weight": 200,
                    "width": 10
                }]
            })
        );
    }

    #[test]
    fn test_create_draft_order_omits_unset_courier() {
        let request = CreateDraftOrderRequest {
            shipment: shipment(),
            ..CreateDraftOrderRequest::default()
        };
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("courier_company").is_none());
        assert_eq!(body["origin_address"], "Test Address");
        assert_eq!(body["items"][0]["weight"], 200);
    }

    #[test]
    fn test_get_areas_request_query_names() {
        let request = GetAreasRequest::new("ID", "Jakarta", AreaSearchType::Multiple);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"countries": "ID", "input": "Jakarta", "type": "multiple"})
        );
    }
}
