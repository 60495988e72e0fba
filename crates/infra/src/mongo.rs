//! MongoDB-backed stores.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use travelease_core::{Booking, SortKey, Vehicle, VehicleFilter, VehicleId};

use crate::store::{BookingStore, InsertAck, StoreResult, VehicleStore};

const DATABASE: &str = "travelEaseDB";
const VEHICLES: &str = "vehicles";
const BOOKINGS: &str = "bookings";

/// Storage-side shape of a vehicle listing.
///
/// `createdAt` is a native BSON datetime, the format the store's seed data
/// uses; the core [`Vehicle`] keeps RFC 3339 strings for client JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    category: String,
    location: String,
    price_per_day: f64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<VehicleDocument> for Vehicle {
    fn from(doc: VehicleDocument) -> Self {
        Self {
            id: doc.id,
            category: doc.category,
            location: doc.location,
            price_per_day: doc.price_per_day,
            created_at: doc.created_at,
            extra: doc.extra,
        }
    }
}

/// Storage-side shape of a booking, with the same BSON datetime treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingDocument {
    vehicle_id: String,
    user_email: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<&Booking> for BookingDocument {
    fn from(booking: &Booking) -> Self {
        Self {
            vehicle_id: booking.vehicle_id.clone(),
            user_email: booking.user_email.clone(),
            created_at: booking.created_at,
            extra: booking.extra.clone(),
        }
    }
}

/// Stores backed by a single shared MongoDB client.
///
/// The client is created once at startup and reused by every request;
/// pooling and reconnection are the driver's concern, not ours.
#[derive(Debug, Clone)]
pub struct MongoStore {
    vehicles: Collection<VehicleDocument>,
    bookings: Collection<BookingDocument>,
}

impl MongoStore {
    /// Connect using the given connection string.
    pub async fn connect(uri: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        tracing::debug!(database = DATABASE, "MongoDB client initialized");
        Ok(Self::new(&client))
    }

    pub fn new(client: &Client) -> Self {
        let db = client.database(DATABASE);
        Self {
            vehicles: db.collection(VEHICLES),
            bookings: db.collection(BOOKINGS),
        }
    }
}

/// Translate a filter into the driver's query document.
///
/// Must agree with [`VehicleFilter::matches`]: exact `category`,
/// case-insensitive `$regex` on `location`, `$gte`/`$lte` bounds in a single
/// `pricePerDay` sub-document. NaN bounds are passed through as-is.
pub fn filter_document(filter: &VehicleFilter) -> Document {
    let mut query = Document::new();

    if let Some(category) = &filter.category {
        query.insert("category", category);
    }
    if let Some(location) = &filter.location {
        query.insert("location", doc! { "$regex": location, "$options": "i" });
    }

    let mut price = Document::new();
    if let Some(min) = filter.min_price {
        price.insert("$gte", min);
    }
    if let Some(max) = filter.max_price {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        query.insert("pricePerDay", price);
    }

    query
}

/// Translate a sort key into the driver's ordering document.
pub fn sort_document(sort: SortKey) -> Document {
    match sort {
        SortKey::Newest => doc! { "createdAt": -1 },
        SortKey::Oldest => doc! { "createdAt": 1 },
        SortKey::PriceAsc => doc! { "pricePerDay": 1 },
        SortKey::PriceDesc => doc! { "pricePerDay": -1 },
    }
}

#[async_trait]
impl VehicleStore for MongoStore {
    async fn latest(&self, limit: i64) -> StoreResult<Vec<Vehicle>> {
        let cursor = self
            .vehicles
            .find(Document::new())
            .sort(sort_document(SortKey::Newest))
            .limit(limit)
            .await?;
        let docs: Vec<VehicleDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Vehicle::from).collect())
    }

    async fn find_by_id(&self, id: VehicleId) -> StoreResult<Option<Vehicle>> {
        let found = self.vehicles.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Vehicle::from))
    }

    async fn search(&self, filter: &VehicleFilter, sort: SortKey) -> StoreResult<Vec<Vehicle>> {
        let cursor = self
            .vehicles
            .find(filter_document(filter))
            .sort(sort_document(sort))
            .await?;
        let docs: Vec<VehicleDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Vehicle::from).collect())
    }
}

#[async_trait]
impl BookingStore for MongoStore {
    async fn insert(&self, booking: &Booking) -> StoreResult<InsertAck> {
        let result = self.bookings.insert_one(BookingDocument::from(booking)).await?;
        let inserted_id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };

        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }
}
