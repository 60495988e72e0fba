//! Filter and sort construction for vehicle listings.
//!
//! This is the service's logical core: raw optional query parameters become
//! a [`VehicleFilter`] and a [`SortKey`], which the storage layer translates
//! into its own query/ordering documents.

use std::cmp::Ordering;

use crate::vehicle::Vehicle;

/// Filter over the vehicle collection.
///
/// Absent fields do not constrain the result; an empty filter matches every
/// listing. Present fields combine as a conjunction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    /// Exact match on `category`.
    pub category: Option<String>,
    /// Case-insensitive substring match on `location`.
    pub location: Option<String>,
    /// `pricePerDay >= min_price`.
    pub min_price: Option<f64>,
    /// `pricePerDay <= max_price`.
    pub max_price: Option<f64>,
}

impl VehicleFilter {
    /// Build a filter from raw optional query parameters.
    ///
    /// Empty strings count as absent, matching the truthiness guards the
    /// HTTP surface has always had. There are no error conditions here:
    /// malformed numeric input flows through as NaN (see [`price_bound`]).
    ///
    /// [`price_bound`]: VehicleFilter::price_bound
    pub fn from_params(
        category: Option<&str>,
        location: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
    ) -> Self {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            category: present(category).map(str::to_owned),
            location: present(location).map(str::to_owned),
            min_price: present(min_price).map(Self::price_bound),
            max_price: present(max_price).map(Self::price_bound),
        }
    }

    /// Convert a raw query-string value into a price bound.
    ///
    /// Malformed input becomes NaN, which compares false against every
    /// stored price, so the filter matches nothing instead of erroring.
    pub fn price_bound(raw: &str) -> f64 {
        raw.trim().parse().unwrap_or(f64::NAN)
    }

    /// True when no predicate is present (matches all listings).
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.location.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Evaluate the filter against a single listing.
    ///
    /// Reference semantics for the storage layer: the in-memory store uses
    /// this directly and the MongoDB translation must agree with it.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(category) = &self.category {
            if vehicle.category != *category {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !vehicle
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        // NaN bounds compare false here, so a malformed price parameter
        // excludes every listing.
        if let Some(min) = self.min_price {
            if !(vehicle.price_per_day >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !(vehicle.price_per_day <= max) {
                return false;
            }
        }
        true
    }
}

/// Sort order for vehicle listings. Exactly one key is ever active; ties
/// keep the store's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// `createdAt` descending (the default).
    #[default]
    Newest,
    /// `createdAt` ascending.
    Oldest,
    /// `pricePerDay` ascending.
    PriceAsc,
    /// `pricePerDay` descending.
    PriceDesc,
}

impl SortKey {
    /// Resolve a `sort` query token.
    ///
    /// Case-sensitive; unrecognized or absent tokens fall back to
    /// newest-first.
    pub fn resolve(token: Option<&str>) -> Self {
        match token {
            Some("newest") => Self::Newest,
            Some("oldest") => Self::Oldest,
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            _ => Self::Newest,
        }
    }

    /// Ordering of two listings under this key.
    pub fn compare(self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::PriceAsc => a.price_per_day.total_cmp(&b.price_per_day),
            Self::PriceDesc => b.price_per_day.total_cmp(&a.price_per_day),
        }
    }
}
