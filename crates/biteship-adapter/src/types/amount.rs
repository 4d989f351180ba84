/*
[INPUT]:  Monetary amounts sent as JSON numbers
[OUTPUT]: Decimal fields that serialize back to the same JSON number
[POS]:    Data layer - serde helpers for money fields
[UPDATE]: When the API changes how amounts are encoded
*/

//! `#[serde(with = "amount")]` for `Decimal` money fields
//!
//! Whole amounts are written as integers and fractional ones as floats, so
//! a decoded body serializes to the JSON it came from.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().is_zero() {
        if let Some(whole) = value.to_u64() {
            return serializer.serialize_u64(whole);
        }
        if let Some(whole) = value.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => serializer.serialize_str(&value.to_string()),
    }
}

/// Accepts numbers and numeric strings
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    <Decimal as Deserialize>::deserialize(deserializer)
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Option::<Decimal>::deserialize(deserializer)
    }
}
