//! Storage seams for vehicles and bookings.
//!
//! Handlers hold these as `Arc<dyn ...>` so the black-box tests can swap the
//! MongoDB-backed stores for the in-memory fake.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use travelease_core::{Booking, SortKey, Vehicle, VehicleFilter, VehicleId};

/// Result type for storage calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer failure. Handlers map every variant to a generic server
/// error; detail stays in the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("internal store fault: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Confirmation of a successful insert, echoed to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Read access to the vehicle collection.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Newest listings first, capped at `limit`.
    async fn latest(&self, limit: i64) -> StoreResult<Vec<Vehicle>>;

    /// Single listing by id; `None` when absent.
    async fn find_by_id(&self, id: VehicleId) -> StoreResult<Option<Vehicle>>;

    /// All listings matching `filter`, in `sort` order. No pagination.
    async fn search(&self, filter: &VehicleFilter, sort: SortKey) -> StoreResult<Vec<Vehicle>>;
}

/// Write access to the booking collection.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a validated booking, returning the driver's acknowledgment.
    async fn insert(&self, booking: &Booking) -> StoreResult<InsertAck>;
}
