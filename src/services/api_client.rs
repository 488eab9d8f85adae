// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here. Each service module adds its endpoints to
// `ApiClient` in its own `impl` block.
// ============================================================================

use gloo_net::http::Request;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{Pagination, YearMonth};
use crate::services::error::ApiError;
use crate::utils::{KeyValueStore, LocalStorage, TOKEN_STORAGE_KEY};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// Everything needed to issue one call: verb, path below the API base,
/// query pairs (in insertion order), optional JSON body.
#[derive(Clone, PartialEq, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Overrides the stored token for this call only
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// `None` values are dropped, the way axios drops null params
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn paginate(self, pagination: Pagination) -> Self {
        self.query("page", pagination.page)
            .query("page_size", pagination.page_size)
    }

    /// `year`/`month` pair, the current month when `period` is `None`
    pub fn for_month(self, period: Option<YearMonth>) -> Self {
        let period = period.unwrap_or_else(YearMonth::current);
        self.query("year", period.year())
            .query("month", period.month())
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Absolute URL with the query string percent-encoded
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire-level seam. `FetchTransport` in the browser, a recording mock in tests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(
        &self,
        url: &str,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, ApiError>;
}

/// `fetch` through gloo-net
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(
        &self,
        url: &str,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };

        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

/// Client bound to one base URL. The bearer token is read from storage on
/// every request, so login/logout take effect without rebuilding the client.
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    transport: Rc<T>,
    storage: Rc<dyn KeyValueStore>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            storage: self.storage.clone(),
        }
    }
}

impl ApiClient<FetchTransport> {
    pub fn new() -> Self {
        Self::with_transport(CONFIG.api_base_url(), FetchTransport, Rc::new(LocalStorage))
    }
}

impl Default for ApiClient<FetchTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(
        base_url: impl Into<String>,
        transport: T,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport: Rc::new(transport),
            storage,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn bearer_for(&self, request: &ApiRequest) -> Option<String> {
        request
            .bearer
            .clone()
            .or_else(|| self.storage.get(TOKEN_STORAGE_KEY))
            .filter(|token| !token.is_empty())
    }

    /// Send `request` and decode the JSON body into `R`.
    /// An empty body decodes as `null`, so `()` and `Option<_>` work for 204s.
    pub async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let url = request.url(&self.base_url);
        let bearer = self.bearer_for(&request);

        log::debug!("🌐 [API] {} {}", request.method, request.path);

        let response = self
            .transport
            .send(&url, &request, bearer.as_deref())
            .await
            .map_err(|e| {
                log::error!("❌ [API] {} {} failed: {}", request.method, request.path, e);
                e
            })?;

        if !response.ok() {
            let error = ApiError::from_response(response.status, &response.body);
            log::warn!("⚠️ [API] {} {} -> {}", request.method, request.path, error);
            return Err(error);
        }

        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// For endpoints whose response body the client never reads
    pub async fn execute_discarding(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute::<IgnoredAny>(request).await.map(|_| ())
    }
}
