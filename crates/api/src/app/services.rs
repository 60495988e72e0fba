use std::sync::Arc;

use travelease_infra::{
    AppConfig, BookingStore, InMemoryStore, MongoStore, StoreResult, VehicleStore,
};

/// Handler-facing collaborators, injected once at startup.
///
/// Stores are trait objects so tests can substitute the in-memory fake for
/// the MongoDB-backed implementation.
pub struct AppServices {
    pub vehicles: Arc<dyn VehicleStore>,
    pub bookings: Arc<dyn BookingStore>,
}

impl AppServices {
    /// Wire both stores onto a single shared MongoDB client.
    pub async fn connect(config: &AppConfig) -> StoreResult<Self> {
        let store = Arc::new(MongoStore::connect(&config.mongodb_uri).await?);
        Ok(Self::with_stores(store.clone(), store))
    }

    /// Wire explicit store implementations.
    pub fn with_stores(
        vehicles: Arc<dyn VehicleStore>,
        bookings: Arc<dyn BookingStore>,
    ) -> Self {
        Self { vehicles, bookings }
    }

    /// Fully in-memory services for tests and local development.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self::with_stores(store.clone(), store)
    }
}
