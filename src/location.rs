//! Search locations and their wire representation.
//!
//! A query may carry any number of locations; the backend treats them as
//! alternatives (OR semantics).

use serde_json::{json, Value};

use crate::catalog::{Department, Region};

/// Default search radius around a city, in meters.
pub const DEFAULT_CITY_RADIUS: u32 = 10_000;

/// A geographic restriction for a search.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A point with a search radius, optionally labeled with the city name.
    City {
        lat: f64,
        lng: f64,
        /// Radius around the point, in meters.
        radius: u32,
        /// Display label, e.g. "Paris".
        label: Option<String>,
    },
    /// A whole administrative region.
    Region(Region),
    /// A single department.
    Department(Department),
}

impl Location {
    /// Creates a city location with the default radius and no label.
    pub fn city(lat: f64, lng: f64) -> Self {
        Location::City {
            lat,
            lng,
            radius: DEFAULT_CITY_RADIUS,
            label: None,
        }
    }

    /// Sets the search radius in meters. No-op for non-city locations.
    pub fn with_radius(mut self, meters: u32) -> Self {
        if let Location::City { radius, .. } = &mut self {
            *radius = meters;
        }
        self
    }

    /// Sets the city label. No-op for non-city locations.
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        if let Location::City { label, .. } = &mut self {
            *label = Some(name.into());
        }
        self
    }

    /// Returns the tagged JSON object sent in `filters.location.locations`.
    pub fn wire(&self) -> Value {
        match self {
            Location::City {
                lat,
                lng,
                radius,
                label,
            } => {
                let mut obj = json!({
                    "locationType": "city",
                    "area": {
                        "lat": lat,
                        "lng": lng,
                        "radius": radius,
                    },
                });
                if let Some(name) = label {
                    obj["city"] = json!(name);
                }
                obj
            }
            Location::Region(region) => json!({
                "locationType": "region",
                "region_id": region.id(),
            }),
            Location::Department(dept) => json!({
                "locationType": "department",
                "region_id": dept.region().id(),
                "department_id": dept.id(),
            }),
        }
    }
}
