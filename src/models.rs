//! Typed entities mapped from backend JSON.
//!
//! Mapping is a pure transform and deliberately tolerant: the backend
//! routinely omits nested objects (counters, owner, pro profile), and those
//! gaps become defaults instead of failing the whole response. The one hard
//! requirement is the identifying id; a payload without it is an
//! upstream-contract violation and surfaces as a mapping error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{LbcError, Result};

/// One (key, value) attribute of an ad, with display labels when provided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub key_label: Option<String>,
    pub value: String,
    pub value_label: Option<String>,
}

/// Where an ad is located.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AdLocation {
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub region_id: Option<String>,
    pub region_name: Option<String>,
    pub department_id: Option<String>,
    pub department_name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// A classified ad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ad {
    pub id: u64,
    pub subject: String,
    pub body: String,
    /// Price in major currency units, converted from the wire's cents.
    pub price: Option<f64>,
    pub url: String,
    pub images: Vec<String>,
    pub category_id: String,
    pub category_name: String,
    pub ad_type: String,
    pub status: String,
    /// Timestamps are passed through exactly as the backend encodes them.
    pub first_publication_date: Option<String>,
    pub expiration_date: Option<String>,
    pub location: AdLocation,
    /// Attributes in the order the backend listed them.
    pub attributes: Vec<Attribute>,
    pub has_phone: bool,
    pub favorites: u64,
    /// Identifier of the owning user, when the owner block is present.
    pub user_id: Option<String>,
}

/// A professional seller profile, nested under [`User`] for pro accounts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProProfile {
    pub online_store_name: Option<String>,
    pub siret: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A marketplace user profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub account_type: String,
    /// Present for professional sellers.
    pub pro: Option<ProProfile>,
    pub phone_verified: bool,
    pub email_verified: bool,
    pub creation_date: Option<String>,
    pub total_ads: u64,
}

impl User {
    /// Returns whether this is a professional account.
    pub fn is_pro(&self) -> bool {
        self.pro.is_some() || self.account_type == "pro"
    }
}

/// One page of search results with the backend's count breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub ads: Vec<Ad>,
    pub total: u64,
    pub total_all: u64,
    pub total_pro: u64,
    pub total_private: u64,
    pub total_active: u64,
    pub total_inactive: u64,
    pub total_shippable: u64,
    /// Number of result pages at the requested page size.
    pub max_pages: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RawImages {
    #[serde(default)]
    urls_large: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAttribute {
    #[serde(default)]
    key: String,
    key_label: Option<String>,
    #[serde(default)]
    value: String,
    value_label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLocation {
    city: Option<String>,
    zipcode: Option<String>,
    region_id: Option<String>,
    region_name: Option<String>,
    department_id: Option<String>,
    department_name: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCounters {
    #[serde(default)]
    favorites: u64,
}

#[derive(Debug, Default, Deserialize)]
struct RawOwner {
    user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAd {
    list_id: Option<u64>,
    subject: Option<String>,
    body: Option<String>,
    price_cents: Option<i64>,
    url: Option<String>,
    images: Option<RawImages>,
    category_id: Option<String>,
    category_name: Option<String>,
    ad_type: Option<String>,
    status: Option<String>,
    first_publication_date: Option<String>,
    expiration_date: Option<String>,
    location: Option<RawLocation>,
    attributes: Option<Vec<RawAttribute>>,
    has_phone: Option<bool>,
    counters: Option<RawCounters>,
    owner: Option<RawOwner>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProProfile {
    online_store_name: Option<String>,
    siret: Option<String>,
    website_url: Option<String>,
    description: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUser {
    user_id: Option<String>,
    name: Option<String>,
    account_type: Option<String>,
    pro: Option<RawProProfile>,
    phone_verified: Option<bool>,
    email_verified: Option<bool>,
    registered_at: Option<String>,
    total_ads: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSearch {
    #[serde(default)]
    ads: Vec<Value>,
    total: Option<u64>,
    total_all: Option<u64>,
    total_pro: Option<u64>,
    total_private: Option<u64>,
    total_active: Option<u64>,
    total_inactive: Option<u64>,
    total_shippable: Option<u64>,
    max_pages: Option<u32>,
}

fn malformed(what: &str, err: impl std::fmt::Display) -> LbcError {
    LbcError::Request(format!("malformed {} payload: {}", what, err))
}

impl Ad {
    /// Maps a raw backend ad object into the domain type.
    pub fn from_value(value: &Value) -> Result<Self> {
        let raw: RawAd =
            serde_json::from_value(value.clone()).map_err(|e| malformed("ad", e))?;
        let id = raw
            .list_id
            .ok_or_else(|| malformed("ad", "missing list_id"))?;

        let location = raw.location.unwrap_or_default();
        Ok(Ad {
            id,
            subject: raw.subject.unwrap_or_default(),
            body: raw.body.unwrap_or_default(),
            price: raw.price_cents.map(|cents| cents as f64 / 100.0),
            url: raw.url.unwrap_or_default(),
            images: raw.images.unwrap_or_default().urls_large,
            category_id: raw.category_id.unwrap_or_default(),
            category_name: raw.category_name.unwrap_or_default(),
            ad_type: raw.ad_type.unwrap_or_default(),
            status: raw.status.unwrap_or_default(),
            first_publication_date: raw.first_publication_date,
            expiration_date: raw.expiration_date,
            location: AdLocation {
                city: location.city,
                zipcode: location.zipcode,
                region_id: location.region_id,
                region_name: location.region_name,
                department_id: location.department_id,
                department_name: location.department_name,
                lat: location.lat,
                lng: location.lng,
            },
            attributes: raw
                .attributes
                .unwrap_or_default()
                .into_iter()
                .map(|attr| Attribute {
                    key: attr.key,
                    key_label: attr.key_label,
                    value: attr.value,
                    value_label: attr.value_label,
                })
                .collect(),
            has_phone: raw.has_phone.unwrap_or(false),
            favorites: raw.counters.unwrap_or_default().favorites,
            user_id: raw.owner.and_then(|owner| owner.user_id),
        })
    }
}

impl User {
    /// Maps a raw backend user object into the domain type.
    pub fn from_value(value: &Value) -> Result<Self> {
        let raw: RawUser =
            serde_json::from_value(value.clone()).map_err(|e| malformed("user", e))?;
        let id = raw
            .user_id
            .ok_or_else(|| malformed("user", "missing user_id"))?;

        Ok(User {
            id,
            name: raw.name.unwrap_or_default(),
            account_type: raw.account_type.unwrap_or_default(),
            pro: raw.pro.map(|pro| ProProfile {
                online_store_name: pro.online_store_name,
                siret: pro.siret,
                website_url: pro.website_url,
                description: pro.description,
                phone: pro.phone,
                email: pro.email,
            }),
            phone_verified: raw.phone_verified.unwrap_or(false),
            email_verified: raw.email_verified.unwrap_or(false),
            creation_date: raw.registered_at,
            total_ads: raw.total_ads.unwrap_or(0),
        })
    }
}

impl SearchResult {
    /// Maps a raw search response, computing the page count for the
    /// requested page size.
    pub fn from_value(value: &Value, limit: u32) -> Result<Self> {
        let raw: RawSearch =
            serde_json::from_value(value.clone()).map_err(|e| malformed("search", e))?;

        let ads = raw
            .ads
            .iter()
            .map(Ad::from_value)
            .collect::<Result<Vec<_>>>()?;

        let total = raw.total.unwrap_or(0);
        let max_pages = raw.max_pages.unwrap_or_else(|| {
            let limit = u64::from(limit.max(1));
            total.div_ceil(limit) as u32
        });

        Ok(SearchResult {
            ads,
            total,
            total_all: raw.total_all.unwrap_or(0),
            total_pro: raw.total_pro.unwrap_or(0),
            total_private: raw.total_private.unwrap_or(0),
            total_active: raw.total_active.unwrap_or(0),
            total_inactive: raw.total_inactive.unwrap_or(0),
            total_shippable: raw.total_shippable.unwrap_or(0),
            max_pages,
        })
    }
}
