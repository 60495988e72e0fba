use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Error message for a booking missing its required fields.
pub const BOOKING_REQUIRED_MSG: &str = "vehicleId and userEmail required";

/// Inbound booking payload.
///
/// Only the two required fields are interpreted; everything else the client
/// sends is carried through to storage untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated booking, ready for insertion.
///
/// `vehicle_id` is not checked against existing vehicles; referential
/// integrity is out of scope for this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub vehicle_id: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Gatekeep an inbound booking and stamp its creation time.
///
/// Rejects when either required field is missing or empty. The caller
/// supplies the wall-clock instant so tests can pin it.
pub fn validate_booking(
    req: BookingRequest,
    created_at: DateTime<Utc>,
) -> DomainResult<Booking> {
    let vehicle_id = req.vehicle_id.filter(|v| !v.is_empty());
    let user_email = req.user_email.filter(|v| !v.is_empty());

    match (vehicle_id, user_email) {
        (Some(vehicle_id), Some(user_email)) => Ok(Booking {
            vehicle_id,
            user_email,
            created_at,
            extra: req.extra,
        }),
        _ => Err(DomainError::validation(BOOKING_REQUIRED_MSG)),
    }
}
