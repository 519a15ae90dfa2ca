//! Client orchestration.
//!
//! Wires the query builder, session manager, transport and response mapper
//! into the three public operations. The retry loop lives here and is
//! explicit: a typed result decides between success, retryable block and
//! fatal error.

use std::sync::Arc;

use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::builder;
use crate::config::ClientConfig;
use crate::models::{Ad, SearchResult, User};
use crate::query::SearchQuery;
use crate::session::Session;
use crate::transport::{ApiRequest, HttpTransport, Transport};
use crate::Result;

/// Client for the marketplace search backend.
///
/// Cheap to share behind an `Arc`; all mutable state lives in the
/// [`Session`] and is safe under concurrent callers.
pub struct Client {
    config: ClientConfig,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let session = Session::new(&config);
        let transport = Arc::new(HttpTransport::new(config.timeout));
        Self {
            config,
            session,
            transport,
        }
    }

    /// Replaces the transport. Lets tests script the backend.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Returns the session manager, e.g. to inspect the request counter.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs a canonical query against the search endpoint.
    ///
    /// The payload is fully formed before any network activity; a query
    /// that fails construction never reaches the backend.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        let request = ApiRequest::post(
            format!("{}/finder/search", self.config.api_url),
            query.payload(),
        );
        let response = self.request_with_retry(&request).await?;
        SearchResult::from_value(&response, query.limit)
    }

    /// Searches from a shared URL, applying the requested paging.
    pub async fn search_url(
        &self,
        shared_url: &str,
        page: u32,
        limit: u32,
    ) -> Result<SearchResult> {
        let query = builder::query_from_url(shared_url)?
            .with_page(page)
            .with_limit(limit);
        self.search(&query).await
    }

    /// Fetches a single ad by identifier.
    pub async fn get_ad(&self, ad_id: &str) -> Result<Ad> {
        let request = ApiRequest::get(format!(
            "{}/finder/classified/{}",
            self.config.api_url, ad_id
        ));
        let response = self.request_with_retry(&request).await?;
        Ad::from_value(&response)
    }

    /// Fetches a user profile by identifier.
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let request = ApiRequest::get(format!("{}/api/users/{}", self.config.api_url, user_id));
        let response = self.request_with_retry(&request).await?;
        User::from_value(&response)
    }

    /// Issues a request through the session manager, retrying only on the
    /// anti-bot block signal.
    ///
    /// Each attempt goes back through [`Session::acquire`], so a retry
    /// waits out the rate gate and picks a fresh identity. The attempt
    /// budget is `max_retries` (at least one attempt).
    async fn request_with_retry(&self, request: &ApiRequest) -> Result<Value> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempt = 0u32;
        loop {
            let identity = self.session.acquire().await;
            match self.transport.execute(request, &identity).await {
                Ok(value) => {
                    debug!(url = %request.url, attempt = attempt + 1, "request succeeded");
                    return Ok(value);
                }
                Err(err) if err.is_retryable() => {
                    attempt += 1;
                    if attempt >= max_attempts {
                        warn!(attempts = attempt, "retry budget exhausted, surfacing block");
                        return Err(err);
                    }
                    let wait = self.session.backoff(attempt);
                    warn!(
                        attempt,
                        wait_ms = wait.as_millis() as u64,
                        "blocked, backing off before rotating identity"
                    );
                    sleep(wait).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Sort};
    use crate::location::Location;
    use crate::LbcError;
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Backend that blocks a scripted number of attempts, then succeeds.
    struct ScriptedTransport {
        blocks_before_success: u32,
        response: Value,
        calls: AtomicU32,
        last_request: Mutex<Option<ApiRequest>>,
    }

    impl ScriptedTransport {
        fn new(blocks_before_success: u32, response: Value) -> Arc<Self> {
            Arc::new(Self {
                blocks_before_success,
                response,
                calls: AtomicU32::new(0),
                last_request: Mutex::new(None),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn execute(&self, request: &ApiRequest, _identity: &crate::session::Identity) -> Result<Value> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.blocks_before_success {
                Err(LbcError::Datadome("scripted block".into()))
            } else {
                Ok(self.response.clone())
            }
        }
    }

    /// Backend that always fails with a non-retryable error.
    struct FailingTransport {
        error: fn() -> LbcError,
        calls: AtomicU32,
    }

    #[async_trait]
    impl Transport for FailingTransport {
        async fn execute(&self, _request: &ApiRequest, _identity: &crate::session::Identity) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
    }

    fn test_client(max_retries: u32, transport: Arc<dyn Transport>) -> Client {
        let config = ClientConfig::new()
            .with_delays(Duration::ZERO, Duration::ZERO)
            .with_max_retries(max_retries);
        Client::with_config(config).with_transport(transport)
    }

    fn search_response() -> Value {
        json!({
            "ads": [{
                "list_id": 1234567890u64,
                "subject": "Maison à vendre",
                "price_cents": 50000000i64
            }],
            "total": 1
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_success_maps_result() {
        let transport = ScriptedTransport::new(0, search_response());
        let client = test_client(5, transport.clone());

        let query = SearchQuery::new()
            .with_text("maison")
            .with_category(Category::Immobilier)
            .with_sort(Sort::Newest)
            .with_location(Location::city(48.8599, 2.3380))
            .with_limit(5);
        let result = client.search(&query).await.unwrap();

        assert_eq!(result.ads.len(), 1);
        assert_eq!(result.ads[0].id, 1234567890);
        assert_eq!(result.ads[0].price, Some(500_000.0));
        assert_eq!(transport.calls(), 1);

        let request = transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.method, Method::POST);
        assert!(request.url.ends_with("/finder/search"));
        let body = request.body.unwrap();
        assert_eq!(body["filters"]["category"]["id"], "8");
        assert_eq!(body["sort_by"], "time");
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_blocked_makes_exactly_max_retries_attempts() {
        let transport = ScriptedTransport::new(u32::MAX, json!({}));
        let client = test_client(3, transport.clone());

        let err = client.search(&SearchQuery::new()).await.unwrap_err();
        assert!(matches!(err, LbcError::Datadome(_)));
        assert_eq!(transport.calls(), 3);
        assert_eq!(client.session().request_count().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_second_attempt_stops_retrying() {
        let transport = ScriptedTransport::new(1, search_response());
        let client = test_client(5, transport.clone());

        let result = client.search(&SearchQuery::new()).await.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_error_is_never_retried() {
        let transport = Arc::new(FailingTransport {
            error: || LbcError::Request("boom".into()),
            calls: AtomicU32::new(0),
        });
        let client = test_client(5, transport.clone());

        let err = client.search(&SearchQuery::new()).await.unwrap_err();
        assert!(matches!(err, LbcError::Request(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_is_never_retried() {
        let transport = Arc::new(FailingTransport {
            error: || LbcError::NotFound("ad 42".into()),
            calls: AtomicU32::new(0),
        });
        let client = test_client(5, transport.clone());

        let err = client.get_ad("42").await.unwrap_err();
        assert!(matches!(err, LbcError::NotFound(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_max_retries_still_attempts_once() {
        let transport = ScriptedTransport::new(u32::MAX, json!({}));
        let client = test_client(0, transport.clone());

        let err = client.search(&SearchQuery::new()).await.unwrap_err();
        assert!(matches!(err, LbcError::Datadome(_)));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_ad_maps_entity() {
        let transport = ScriptedTransport::new(
            0,
            json!({
                "list_id": 42u64,
                "subject": "Vélo de course",
                "price_cents": 15000i64,
                "counters": {"favorites": 2}
            }),
        );
        let client = test_client(5, transport.clone());

        let ad = client.get_ad("42").await.unwrap();
        assert_eq!(ad.id, 42);
        assert_eq!(ad.price, Some(150.0));
        assert_eq!(ad.favorites, 2);

        let request = transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.method, Method::GET);
        assert!(request.url.contains("/finder/classified/42"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_user_maps_entity() {
        let transport = ScriptedTransport::new(
            0,
            json!({
                "user_id": "user123",
                "name": "John Doe",
                "account_type": "private"
            }),
        );
        let client = test_client(5, transport.clone());

        let user = client.get_user("user123").await.unwrap();
        assert_eq!(user.id, "user123");
        assert!(!user.is_pro());

        let request = transport.last_request.lock().unwrap().clone().unwrap();
        assert!(request.url.contains("/api/users/user123"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_url_construction_error_sends_nothing() {
        let transport = ScriptedTransport::new(0, search_response());
        let client = test_client(5, transport.clone());

        let err = client.search_url("not a url", 1, 35).await.unwrap_err();
        assert!(matches!(err, LbcError::InvalidValue(_)));
        assert_eq!(transport.calls(), 0);
        assert_eq!(client.session().request_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_url_applies_paging() {
        let transport = ScriptedTransport::new(0, json!({"ads": [], "total": 0}));
        let client = test_client(5, transport.clone());

        client
            .search_url(
                "https://www.leboncoin.fr/recherche?text=maison&category=9",
                2,
                10,
            )
            .await
            .unwrap();

        let request = transport.last_request.lock().unwrap().clone().unwrap();
        let body = request.body.unwrap();
        assert_eq!(body["limit"], 10);
        assert_eq!(body["offset"], 10);
        assert_eq!(body["filters"]["category"]["id"], "9");
    }
}
