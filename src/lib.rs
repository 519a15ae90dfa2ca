//! # lbc
//!
//! A client library for the leboncoin classifieds search backend.
//!
//! The backend is defended by DataDome anti-bot measures, so this client
//! pairs its typed query/response layer with a session manager that rotates
//! transport identities, spaces requests out and backs off on blocks:
//!
//! - Canonical query construction from structured filters or a shared
//!   search URL (both paths produce identical payloads)
//! - Proxy and user-agent rotation with a shared rate gate
//! - Retry with exponential backoff, strictly on the block signal
//! - Defensive mapping of partial backend JSON into typed entities
//!
//! ## Example
//!
//! ```rust,no_run
//! use lbc::catalog::{Category, Sort};
//! use lbc::location::Location;
//! use lbc::{Client, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::new();
//!
//!     let query = SearchQuery::new()
//!         .with_text("maison")
//!         .with_category(Category::Immobilier)
//!         .with_sort(Sort::Newest)
//!         .with_location(Location::city(48.8599, 2.3380).with_radius(10_000))
//!         .with_limit(5);
//!
//!     let result = client.search(&query).await?;
//!     for ad in &result.ads {
//!         println!("{} - {:?} EUR", ad.subject, ad.price);
//!     }
//!     Ok(())
//! }
//! ```

mod builder;
mod client;
mod config;
mod error;
mod models;
mod query;
mod session;
mod transport;

pub mod catalog;
pub mod location;

pub use builder::{query_from_args, query_from_url, SearchArgs};
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{LbcError, Result};
pub use models::{Ad, AdLocation, Attribute, ProProfile, SearchResult, User};
pub use query::{EnumValues, RangeFilter, SearchQuery, DEFAULT_LIMIT};
pub use session::{Identity, ProxyConfig, ProxyProtocol, Session, DEFAULT_USER_AGENTS};
pub use transport::{ApiRequest, HttpTransport, Transport};
