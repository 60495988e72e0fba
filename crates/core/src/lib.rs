//! Domain model and logical core for the TravelEase rental service.
//!
//! The interesting parts of this service are small: a filter builder and a
//! sort resolver for vehicle listings, and a booking validator. Everything
//! storage- or HTTP-specific lives in the `infra` and `api` crates.

pub mod booking;
pub mod error;
pub mod query;
pub mod vehicle;

pub use booking::{validate_booking, Booking, BookingRequest, BOOKING_REQUIRED_MSG};
pub use error::{DomainError, DomainResult};
pub use query::{SortKey, VehicleFilter};
pub use vehicle::{Vehicle, VehicleId};
