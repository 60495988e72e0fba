//! Infrastructure layer: storage collaborator and configuration.

pub mod config;
pub mod memory;
pub mod mongo;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use store::{BookingStore, InsertAck, StoreError, StoreResult, VehicleStore};
