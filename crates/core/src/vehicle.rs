use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vehicle identifier: the document store's native object id.
pub type VehicleId = ObjectId;

/// A rental vehicle listing.
///
/// Read-only from this service's perspective: listings are seeded and
/// managed elsewhere, the API only filters and sorts them. Fields the
/// service does not interpret (description, images, owner details, ...)
/// ride along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(
        rename = "_id",
        serialize_with = "bson::serde_helpers::serialize_object_id_as_hex_string"
    )]
    pub id: VehicleId,
    pub category: String,
    pub location: String,
    pub price_per_day: f64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_plain_hex_string() {
        let id = ObjectId::new();
        let vehicle = Vehicle {
            id,
            category: "suv".to_string(),
            location: "Dhaka".to_string(),
            price_per_day: 120.0,
            created_at: Utc::now(),
            extra: Map::new(),
        };

        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["_id"], Value::String(id.to_hex()));
        assert_eq!(json["pricePerDay"], serde_json::json!(120.0));
    }

    #[test]
    fn unknown_fields_round_trip_through_extra() {
        let vehicle = Vehicle {
            id: ObjectId::new(),
            category: "sedan".to_string(),
            location: "Sylhet".to_string(),
            price_per_day: 80.0,
            created_at: Utc::now(),
            extra: serde_json::json!({ "seats": 4, "fuel": "petrol" })
                .as_object()
                .cloned()
                .unwrap(),
        };

        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["seats"], serde_json::json!(4));
        assert_eq!(json["fuel"], serde_json::json!("petrol"));
    }
}
