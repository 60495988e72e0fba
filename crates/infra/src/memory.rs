//! In-memory stores for tests and local development.

use std::sync::RwLock;

use async_trait::async_trait;
use bson::oid::ObjectId;

use travelease_core::{Booking, SortKey, Vehicle, VehicleFilter, VehicleId};

use crate::store::{BookingStore, InsertAck, StoreError, StoreResult, VehicleStore};

/// Both collections behind one fake.
///
/// Matching and ordering go through the core's reference semantics
/// ([`VehicleFilter::matches`], [`SortKey::compare`]), so this store behaves
/// the way the MongoDB translation is required to.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    vehicles: RwLock<Vec<Vehicle>>,
    bookings: RwLock<Vec<(ObjectId, Booking)>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: RwLock::new(vehicles),
            bookings: RwLock::new(Vec::new()),
        }
    }

    /// Bookings persisted so far, in insertion order.
    pub fn bookings(&self) -> Vec<Booking> {
        match self.bookings.read() {
            Ok(guard) => guard.iter().map(|(_, b)| b.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

#[async_trait]
impl VehicleStore for InMemoryStore {
    async fn latest(&self, limit: i64) -> StoreResult<Vec<Vehicle>> {
        let guard = self
            .vehicles
            .read()
            .map_err(|_| StoreError::internal("vehicle store lock poisoned"))?;

        let mut items = guard.clone();
        items.sort_by(|a, b| SortKey::Newest.compare(a, b));
        items.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(items)
    }

    async fn find_by_id(&self, id: VehicleId) -> StoreResult<Option<Vehicle>> {
        let guard = self
            .vehicles
            .read()
            .map_err(|_| StoreError::internal("vehicle store lock poisoned"))?;

        Ok(guard.iter().find(|v| v.id == id).cloned())
    }

    async fn search(&self, filter: &VehicleFilter, sort: SortKey) -> StoreResult<Vec<Vehicle>> {
        let guard = self
            .vehicles
            .read()
            .map_err(|_| StoreError::internal("vehicle store lock poisoned"))?;

        let mut items: Vec<Vehicle> = guard.iter().filter(|v| filter.matches(v)).cloned().collect();
        // Stable sort: ties keep insertion order, the fake's natural order.
        items.sort_by(|a, b| sort.compare(a, b));
        Ok(items)
    }
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn insert(&self, booking: &Booking) -> StoreResult<InsertAck> {
        let mut guard = self
            .bookings
            .write()
            .map_err(|_| StoreError::internal("booking store lock poisoned"))?;

        let id = ObjectId::new();
        guard.push((id, booking.clone()));

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use travelease_core::{validate_booking, BookingRequest};

    fn listing(category: &str, location: &str, price: f64, days_ago: i64) -> Vehicle {
        Vehicle {
            id: ObjectId::new(),
            category: category.to_string(),
            location: location.to_string(),
            price_per_day: price,
            created_at: Utc::now() - Duration::days(days_ago),
            extra: serde_json::Map::new(),
        }
    }

    fn seeded() -> InMemoryStore {
        InMemoryStore::with_vehicles(vec![
            listing("suv", "New York", 120.0, 1),
            listing("sedan", "Boston", 60.0, 2),
            listing("suv", "new york", 90.0, 3),
            listing("van", "Chicago", 150.0, 4),
        ])
    }

    #[tokio::test]
    async fn latest_caps_and_orders_newest_first() {
        let vehicles = (0..8).map(|d| listing("suv", "Dhaka", 100.0, d)).collect();
        let store = InMemoryStore::with_vehicles(vehicles);

        let items = store.latest(6).await.unwrap();
        assert_eq!(items.len(), 6);
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_ids() {
        let store = seeded();
        assert!(store.find_by_id(ObjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_returns_the_matching_listing() {
        let vehicle = listing("suv", "Dhaka", 100.0, 0);
        let id = vehicle.id;
        let store = InMemoryStore::with_vehicles(vec![vehicle]);

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn search_applies_the_filter_conjunction() {
        let store = seeded();
        let filter = VehicleFilter::from_params(Some("suv"), Some("york"), None, None);

        let items = store.search(&filter, SortKey::Newest).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|v| v.category == "suv"));
    }

    #[tokio::test]
    async fn search_orders_by_the_resolved_key() {
        let store = seeded();
        let all = VehicleFilter::default();

        let by_price = store.search(&all, SortKey::PriceAsc).await.unwrap();
        assert!(by_price
            .windows(2)
            .all(|w| w[0].price_per_day <= w[1].price_per_day));

        let by_age = store.search(&all, SortKey::Oldest).await.unwrap();
        assert!(by_age.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn inverted_price_range_yields_an_empty_result() {
        let store = seeded();
        let filter = VehicleFilter::from_params(None, None, Some("100"), Some("50"));

        let items = store.search(&filter, SortKey::Newest).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn insert_acknowledges_with_a_fresh_id() {
        let store = InMemoryStore::new();
        let booking = validate_booking(
            BookingRequest {
                vehicle_id: Some("v1".to_string()),
                user_email: Some("a@b.com".to_string()),
                extra: serde_json::Map::new(),
            },
            Utc::now(),
        )
        .unwrap();

        let ack = store.insert(&booking).await.unwrap();
        assert!(ack.acknowledged);
        assert_eq!(ack.inserted_id.len(), 24);
        assert_eq!(store.bookings(), vec![booking]);
    }
}
