//! Transport seam between the orchestrator and the backend.
//!
//! The [`Transport`] trait is the only place the network is touched, so the
//! retry loop can be exercised in tests with scripted backends.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::session::Identity;
use crate::{LbcError, Result};

/// A single backend request, ready to be issued under some identity.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Trait for issuing one request attempt under a transport identity.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the parsed JSON response body.
    async fn execute(&self, request: &ApiRequest, identity: &Identity) -> Result<Value>;
}

/// Real transport over reqwest. A fresh client is built per attempt so the
/// selected proxy and user agent actually apply.
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the given per-attempt timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

/// Maps a backend status into the error taxonomy. The backend fronts its
/// anti-bot rejections as 403s; 404 is an explicit not-found signal.
fn check_status(status: StatusCode, url: &str) -> Result<()> {
    if status == StatusCode::FORBIDDEN {
        return Err(LbcError::Datadome(format!("status 403 from {}", url)));
    }
    if status == StatusCode::NOT_FOUND {
        return Err(LbcError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(LbcError::Request(format!("status {} from {}", status, url)));
    }
    Ok(())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest, identity: &Identity) -> Result<Value> {
        let client = identity.build_client(self.timeout)?;

        let mut builder = client
            .request(request.method.clone(), &request.url)
            .header("Accept", "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(method = %request.method, url = %request.url, "sending request");
        let response = builder.send().await?;
        check_status(response.status(), &request.url)?;

        Ok(response.json::<Value>().await?)
    }
}
