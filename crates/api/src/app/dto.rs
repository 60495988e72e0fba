use serde::Deserialize;

use travelease_core::{SortKey, VehicleFilter};

/// Raw query parameters for `GET /api/vehicles`.
///
/// All optional; values arrive as strings and are resolved into the core
/// filter/sort pair without erroring on malformed input.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVehiclesQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub sort: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ListVehiclesQuery {
    pub fn into_parts(self) -> (VehicleFilter, SortKey) {
        let filter = VehicleFilter::from_params(
            self.category.as_deref(),
            self.location.as_deref(),
            self.min_price.as_deref(),
            self.max_price.as_deref(),
        );
        let sort = SortKey::resolve(self.sort.as_deref());
        (filter, sort)
    }
}
