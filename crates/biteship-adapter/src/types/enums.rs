/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Role of a saved location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Origin,
    Destination,
}

/// Match mode of an area search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaSearchType {
    Single,
    Multiple,
}

/// When the courier should pick up the shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Now,
    Schedule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&LocationType::Origin).unwrap(), r#""origin""#);
        assert_eq!(serde_json::to_string(&AreaSearchType::Multiple).unwrap(), r#""multiple""#);
        assert_eq!(serde_json::to_string(&DeliveryType::Schedule).unwrap(), r#""schedule""#);

        let parsed: LocationType = serde_json::from_str(r#""destination""#).unwrap();
        assert_eq!(parsed, LocationType::Destination);
    }
}
