//! Canonical search query representation.
//!
//! A [`SearchQuery`] is the wire-ready form of a search, independent of
//! whether it was built from structured arguments or parsed out of a shared
//! URL. Filter maps are kept in `BTreeMap`s so equivalent queries produce
//! identical payloads regardless of construction order.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::catalog::{AdType, Category, OwnerType, Sort};
use crate::location::Location;
use crate::{LbcError, Result};

/// Default number of ads per result page.
pub const DEFAULT_LIMIT: u32 = 35;

/// A numeric (min, max) range filter, e.g. price or floor area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub min: i64,
    pub max: i64,
}

impl RangeFilter {
    /// Creates a range filter from an explicit pair.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Builds a range filter from raw JSON elements.
    ///
    /// Anything other than a two-element array is silently dropped
    /// (`Ok(None)`), matching the lenient handling of the public search
    /// API. Elements that cannot be read as integers raise
    /// [`LbcError::InvalidValue`].
    pub fn from_json(name: &str, values: &[Value]) -> Result<Option<Self>> {
        if values.len() != 2 {
            return Ok(None);
        }
        let bound = |value: &Value| {
            value.as_i64().ok_or_else(|| {
                LbcError::InvalidValue(format!(
                    "range filter '{}' expects integer bounds, got {}",
                    name, value
                ))
            })
        };
        Ok(Some(RangeFilter::new(bound(&values[0])?, bound(&values[1])?)))
    }

    fn wire(&self) -> Value {
        json!({ "min": self.min, "max": self.max })
    }
}

/// Values of an enum filter, homogeneously typed by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValues {
    Strings(Vec<String>),
    Integers(Vec<i64>),
}

impl EnumValues {
    /// Builds an enum filter from raw JSON elements.
    ///
    /// All elements must share a single type, string or integer. Mixing is
    /// an [`LbcError::InvalidValue`] construction error, never a coercion.
    pub fn from_json(name: &str, values: &[Value]) -> Result<Self> {
        if values.iter().all(Value::is_string) {
            return Ok(EnumValues::Strings(
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect(),
            ));
        }
        if values.iter().all(Value::is_i64) {
            return Ok(EnumValues::Integers(
                values.iter().filter_map(Value::as_i64).collect(),
            ));
        }
        Err(LbcError::InvalidValue(format!(
            "enum filter '{}' mixes value types",
            name
        )))
    }

    fn wire(&self) -> Value {
        match self {
            EnumValues::Strings(values) => json!(values),
            EnumValues::Integers(values) => json!(values),
        }
    }
}

/// The canonical, backend-ready representation of a search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text keywords.
    pub text: Option<String>,
    /// Restrict keyword matching to the ad subject.
    pub title_only: bool,
    /// Backend category identifier (see [`Category`]).
    pub category_id: String,
    /// Sort key and direction.
    pub sort: Sort,
    /// Offer or demand.
    pub ad_type: AdType,
    /// Optional seller kind restriction.
    pub owner_type: Option<OwnerType>,
    /// Locations combined as alternatives.
    pub locations: Vec<Location>,
    /// Result page, 1-indexed.
    pub page: u32,
    /// Ads per page.
    pub limit: u32,
    /// Named range filters.
    pub ranges: BTreeMap<String, RangeFilter>,
    /// Named enum filters.
    pub enums: BTreeMap<String, EnumValues>,
}

impl SearchQuery {
    /// Creates an empty query with documented defaults: all categories,
    /// relevance sort, offers, page 1.
    pub fn new() -> Self {
        Self {
            text: None,
            title_only: false,
            category_id: Category::default().id().to_string(),
            sort: Sort::default(),
            ad_type: AdType::default(),
            owner_type: None,
            locations: Vec::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
            ranges: BTreeMap::new(),
            enums: BTreeMap::new(),
        }
    }

    /// Sets the free-text keywords.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Restricts keyword matching to the ad subject.
    pub fn with_title_only(mut self, title_only: bool) -> Self {
        self.title_only = title_only;
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category_id = category.id().to_string();
        self
    }

    /// Sets a raw category identifier, as parsed from a shared URL.
    pub fn with_category_id(mut self, id: impl Into<String>) -> Self {
        self.category_id = id.into();
        self
    }

    /// Sets the sort order.
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the ad type.
    pub fn with_ad_type(mut self, ad_type: AdType) -> Self {
        self.ad_type = ad_type;
        self
    }

    /// Sets the seller kind restriction.
    pub fn with_owner_type(mut self, owner_type: OwnerType) -> Self {
        self.owner_type = Some(owner_type);
        self
    }

    /// Adds a location alternative.
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Sets the result page (1-indexed).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the number of ads per page.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Adds a named range filter.
    pub fn with_range(mut self, name: impl Into<String>, min: i64, max: i64) -> Self {
        self.ranges.insert(name.into(), RangeFilter::new(min, max));
        self
    }

    /// Adds a named enum filter.
    pub fn with_enum(mut self, name: impl Into<String>, values: EnumValues) -> Self {
        self.enums.insert(name.into(), values);
        self
    }

    /// Returns the zero-based offset sent to the backend.
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.limit
    }

    /// Builds the canonical wire payload for the search endpoint.
    pub fn payload(&self) -> Value {
        let mut filters = Map::new();

        filters.insert("category".into(), json!({ "id": self.category_id }));

        let mut enums = Map::new();
        enums.insert("ad_type".into(), json!([self.ad_type.value()]));
        for (name, values) in &self.enums {
            enums.insert(name.clone(), values.wire());
        }
        filters.insert("enums".into(), Value::Object(enums));

        let mut keywords = Map::new();
        if let Some(text) = &self.text {
            keywords.insert("text".into(), json!(text));
        }
        if self.title_only {
            keywords.insert("type".into(), json!("subject"));
        }
        filters.insert("keywords".into(), Value::Object(keywords));

        if !self.locations.is_empty() {
            let locations: Vec<Value> = self.locations.iter().map(Location::wire).collect();
            filters.insert("location".into(), json!({ "locations": locations }));
        }

        if !self.ranges.is_empty() {
            let mut ranges = Map::new();
            for (name, range) in &self.ranges {
                ranges.insert(name.clone(), range.wire());
            }
            filters.insert("ranges".into(), Value::Object(ranges));
        }

        let mut payload = Map::new();
        payload.insert("filters".into(), Value::Object(filters));
        payload.insert("limit".into(), json!(self.limit));
        payload.insert("offset".into(), json!(self.offset()));
        if let Some(owner) = self.owner_type {
            payload.insert("owner_type".into(), json!(owner.value()));
        }
        payload.insert("sort_by".into(), json!(self.sort.key()));
        if let Some(order) = self.sort.order() {
            payload.insert("sort_order".into(), json!(order));
        }
        Value::Object(payload)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new();
        assert!(query.text.is_none());
        assert!(!query.title_only);
        assert_eq!(query.category_id, "0");
        assert_eq!(query.sort, Sort::Relevance);
        assert_eq!(query.ad_type, AdType::Offer);
        assert!(query.owner_type.is_none());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_offset_from_page() {
        let query = SearchQuery::new().with_page(3).with_limit(35);
        assert_eq!(query.offset(), 70);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let query = SearchQuery::new().with_page(0);
        assert_eq!(query.page, 1);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_payload_immobilier_newest_city() {
        let query = SearchQuery::new()
            .with_text("maison")
            .with_category(Category::Immobilier)
            .with_sort(Sort::Newest)
            .with_location(Location::city(48.8599, 2.3380).with_radius(10_000))
            .with_page(1)
            .with_limit(5);
        let payload = query.payload();

        assert_eq!(payload["filters"]["category"]["id"], "8");
        assert_eq!(payload["filters"]["keywords"]["text"], "maison");
        assert_eq!(payload["sort_by"], "time");
        assert_eq!(payload["sort_order"], "desc");
        assert_eq!(payload["limit"], 5);
        assert_eq!(payload["offset"], 0);

        let locations = payload["filters"]["location"]["locations"]
            .as_array()
            .unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0]["locationType"], "city");
        assert_eq!(locations[0]["area"]["radius"], 10_000);
    }

    #[test]
    fn test_payload_relevance_omits_sort_order() {
        let payload = SearchQuery::new().payload();
        assert_eq!(payload["sort_by"], "relevance");
        assert!(payload.get("sort_order").is_none());
    }

    #[test]
    fn test_payload_always_carries_ad_type_enum() {
        let payload = SearchQuery::new().payload();
        assert_eq!(payload["filters"]["enums"]["ad_type"], json!(["offer"]));

        let payload = SearchQuery::new().with_ad_type(AdType::Demand).payload();
        assert_eq!(payload["filters"]["enums"]["ad_type"], json!(["demand"]));
    }

    #[test]
    fn test_payload_owner_type_is_optional() {
        let payload = SearchQuery::new().payload();
        assert!(payload.get("owner_type").is_none());

        let payload = SearchQuery::new()
            .with_owner_type(OwnerType::Pro)
            .payload();
        assert_eq!(payload["owner_type"], "pro");
    }

    #[test]
    fn test_payload_ranges() {
        let payload = SearchQuery::new()
            .with_range("square", 200, 400)
            .with_range("price", 300_000, 700_000)
            .payload();
        assert_eq!(payload["filters"]["ranges"]["square"]["min"], 200);
        assert_eq!(payload["filters"]["ranges"]["square"]["max"], 400);
        assert_eq!(payload["filters"]["ranges"]["price"]["min"], 300_000);
        assert_eq!(payload["filters"]["ranges"]["price"]["max"], 700_000);
    }

    #[test]
    fn test_payload_omits_empty_sections() {
        let payload = SearchQuery::new().payload();
        assert!(payload["filters"].get("ranges").is_none());
        assert!(payload["filters"].get("location").is_none());
    }

    #[test]
    fn test_payload_enum_filters() {
        let query = SearchQuery::new()
            .with_enum(
                "real_estate_type",
                EnumValues::Strings(vec!["3".into(), "4".into()]),
            )
            .with_enum(
                "rooms",
                EnumValues::Strings(vec!["2".into(), "3".into(), "4".into()]),
            );
        let payload = query.payload();
        assert_eq!(
            payload["filters"]["enums"]["real_estate_type"],
            json!(["3", "4"])
        );
        assert_eq!(payload["filters"]["enums"]["rooms"], json!(["2", "3", "4"]));
    }

    #[test]
    fn test_payload_title_only_keyword_type() {
        let payload = SearchQuery::new()
            .with_text("maison")
            .with_title_only(true)
            .payload();
        assert_eq!(payload["filters"]["keywords"]["type"], "subject");
    }

    #[test]
    fn test_range_from_json_pair() {
        let range = RangeFilter::from_json("square", &[json!(200), json!(400)])
            .unwrap()
            .unwrap();
        assert_eq!(range, RangeFilter::new(200, 400));
    }

    #[test]
    fn test_range_from_json_wrong_arity_is_dropped() {
        assert!(RangeFilter::from_json("square", &[json!(100)])
            .unwrap()
            .is_none());
        assert!(RangeFilter::from_json("square", &[]).unwrap().is_none());
        assert!(
            RangeFilter::from_json("square", &[json!(1), json!(2), json!(3)])
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_range_from_json_non_numeric_is_invalid() {
        let err = RangeFilter::from_json("square", &[json!("low"), json!(400)]).unwrap_err();
        assert!(matches!(err, LbcError::InvalidValue(_)));
    }

    #[test]
    fn test_enum_from_json_homogeneous_strings() {
        let values = EnumValues::from_json("rooms", &[json!("2"), json!("3")]).unwrap();
        assert_eq!(values, EnumValues::Strings(vec!["2".into(), "3".into()]));
    }

    #[test]
    fn test_enum_from_json_homogeneous_integers() {
        let values = EnumValues::from_json("rooms", &[json!(2), json!(3)]).unwrap();
        assert_eq!(values, EnumValues::Integers(vec![2, 3]));
    }

    #[test]
    fn test_enum_from_json_mixed_types_is_invalid() {
        let err = EnumValues::from_json("rooms", &[json!(1), json!("2"), json!(3)]).unwrap_err();
        assert!(matches!(err, LbcError::InvalidValue(_)));
    }

    #[test]
    fn test_payload_is_deterministic() {
        let build = |first_range: &str| {
            SearchQuery::new()
                .with_text("maison")
                .with_range(first_range, 200, 400)
                .with_range(
                    if first_range == "square" { "price" } else { "square" },
                    200,
                    400,
                )
                .payload()
        };
        assert_eq!(build("square"), build("price"));
    }
}
