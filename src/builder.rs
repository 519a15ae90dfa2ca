//! Query construction from structured arguments or a shared search URL.
//!
//! Both entry points produce the same canonical [`SearchQuery`]: a search
//! described once as arguments and once as the equivalent shared URL must
//! yield identical wire payloads.

use serde_json::Value;
use url::Url;

use crate::catalog::{AdType, Category, OwnerType, Sort};
use crate::location::{Location, DEFAULT_CITY_RADIUS};
use crate::query::{EnumValues, RangeFilter, SearchQuery};
use crate::Result;

/// Structured search arguments, as received at the API boundary.
///
/// Name fields are resolved through the tolerant [`crate::catalog`] lookups;
/// unknown names fall back to the documented defaults instead of failing.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub text: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub ad_type: Option<String>,
    pub owner_type: Option<String>,
    pub title_only: bool,
    pub locations: Vec<Location>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Named range filters as raw JSON elements, e.g. `("square", [200, 400])`.
    pub ranges: Vec<(String, Vec<Value>)>,
    /// Named enum filters as raw JSON elements, e.g. `("rooms", ["2", "3"])`.
    pub enums: Vec<(String, Vec<Value>)>,
}

/// Builds a canonical query from structured arguments.
///
/// Range filters that are not two-element pairs are dropped; enum filters
/// with mixed element types fail with `InvalidValue`. See
/// [`RangeFilter::from_json`] and [`EnumValues::from_json`] for the exact
/// policy.
pub fn query_from_args(args: &SearchArgs) -> Result<SearchQuery> {
    let mut query = SearchQuery::new()
        .with_category(Category::from_name(args.category.as_deref().unwrap_or("")))
        .with_sort(Sort::from_name(args.sort.as_deref().unwrap_or("")))
        .with_ad_type(AdType::from_name(args.ad_type.as_deref().unwrap_or("")))
        .with_title_only(args.title_only);

    if let Some(text) = &args.text {
        query = query.with_text(text.clone());
    }
    if let Some(owner) = args.owner_type.as_deref().and_then(OwnerType::from_name) {
        query = query.with_owner_type(owner);
    }
    for location in &args.locations {
        query = query.with_location(location.clone());
    }
    if let Some(page) = args.page {
        query = query.with_page(page);
    }
    if let Some(limit) = args.limit {
        query = query.with_limit(limit);
    }

    for (name, values) in &args.ranges {
        if let Some(range) = RangeFilter::from_json(name, values)? {
            query.ranges.insert(name.clone(), range);
        }
    }
    for (name, values) in &args.enums {
        let parsed = EnumValues::from_json(name, values)?;
        query.enums.insert(name.clone(), parsed);
    }

    Ok(query)
}

/// Builds a canonical query from a shared search URL.
///
/// The public URL grammar carries `category` (raw backend id), `text`,
/// `locations` (semicolon-separated `Label__lat_lng[_radius]` city tokens)
/// and `<name>=min-max` range tokens. Unknown parameters are ignored.
pub fn query_from_url(shared_url: &str) -> Result<SearchQuery> {
    let parsed = Url::parse(shared_url)?;
    let mut query = SearchQuery::new();

    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "category" => query.category_id = value.to_string(),
            "text" => query.text = Some(value.to_string()),
            "locations" => {
                for location in parse_city_tokens(&value) {
                    query.locations.push(location);
                }
            }
            name => {
                if let Some(range) = parse_range_token(&value) {
                    query.ranges.insert(name.to_string(), range);
                }
            }
        }
    }

    Ok(query)
}

/// Parses a `min-max` range token; anything else is not a range parameter.
fn parse_range_token(value: &str) -> Option<RangeFilter> {
    let (min, max) = value.split_once('-')?;
    let min = min.trim().parse::<i64>().ok()?;
    let max = max.trim().parse::<i64>().ok()?;
    Some(RangeFilter::new(min, max))
}

/// Parses the compound `Label__lat_lng[_radius]` city descriptors.
/// Malformed tokens are skipped.
fn parse_city_tokens(raw: &str) -> Vec<Location> {
    raw.split(';')
        .filter_map(|token| {
            let (label, coords) = token.split_once("__")?;
            let mut parts = coords.split('_');
            let lat = parts.next()?.parse::<f64>().ok()?;
            let lng = parts.next()?.parse::<f64>().ok()?;
            let radius = parts
                .next()
                .and_then(|r| r.parse::<u32>().ok())
                .unwrap_or(DEFAULT_CITY_RADIUS);
            let mut location = Location::city(lat, lng).with_radius(radius);
            if !label.is_empty() {
                location = location.with_label(label);
            }
            Some(location)
        })
        .collect()
}
