//! HTTP transport layer for the Mattermost client.
//!
//! Performs one authenticated round-trip per call and classifies the
//! outcome: success, 304 Not Modified, structured `AppError`, or network
//! failure. The response body is always read to completion so the
//! underlying connection can be reused.

use crate::errors::{AppError, MattermostResult, NetworkError, SerializationError};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Response header carrying the server-assigned request id
pub const HEADER_REQUEST_ID: &str = "X-Request-ID";
/// Response header carrying the server version
pub const HEADER_VERSION_ID: &str = "X-Version-ID";
/// Response header carrying the caching validator
pub const HEADER_ETAG_SERVER: &str = "ETag";
/// Request header carrying the caching validator
pub const HEADER_ETAG_CLIENT: &str = "If-None-Match";

/// One API request: method, absolute URL, headers, optional JSON body, and
/// optional caching validator.
#[derive(Debug)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL (base API URL + route)
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Option<String>,
    /// Caching validator sent as `If-None-Match`
    pub etag: Option<String>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            body: None,
            etag: None,
        }
    }

    /// Create a POST request with a serialized body
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(body.into()),
            etag: None,
        }
    }

    /// Create a PUT request with a serialized body
    pub fn put(url: impl Into<String>, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            method: Method::PUT,
            url: url.into(),
            headers,
            body: Some(body.into()),
            etag: None,
        }
    }

    /// Create a DELETE request
    pub fn delete(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::DELETE,
            url: url.into(),
            headers,
            body: None,
            etag: None,
        }
    }

    /// Attach a caching validator; empty strings are dropped
    pub fn with_etag(mut self, etag: &str) -> Self {
        if !etag.is_empty() {
            self.etag = Some(etag.to_string());
        }
        self
    }
}

/// Raw response handle: status, headers, and the fully drained body
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Complete response body
    pub body: Bytes,
}

impl RawResponse {
    /// Extract the response metadata carried in headers
    pub fn meta(&self) -> ResponseMeta {
        let header = |name: &str| {
            self.headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        ResponseMeta {
            status_code: self.status.as_u16(),
            request_id: header(HEADER_REQUEST_ID),
            etag: header(HEADER_ETAG_SERVER),
            server_version: header(HEADER_VERSION_ID),
        }
    }
}

/// Metadata returned alongside every decoded entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    /// HTTP status code
    pub status_code: u16,
    /// Server-assigned request id
    pub request_id: Option<String>,
    /// Caching validator for subsequent conditional requests
    pub etag: Option<String>,
    /// Server version string
    pub server_version: Option<String>,
}

/// A decoded entity plus its response metadata.
///
/// `body` is `None` exactly when the server answered 304 Not Modified.
#[derive(Debug)]
pub struct ClientResponse<T> {
    /// Decoded entity; absent on 304
    pub body: Option<T>,
    /// Response metadata
    pub meta: ResponseMeta,
}

impl<T> ClientResponse<T> {
    /// Whether the server answered 304 Not Modified
    pub fn is_not_modified(&self) -> bool {
        self.meta.status_code == StatusCode::NOT_MODIFIED.as_u16()
    }

    /// Consume the response, yielding the entity if one was decoded
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Consume the response, requiring a decoded entity.
    ///
    /// For operations that never send a validator and therefore never
    /// expect a 304.
    pub fn require_body(self, operation: &str) -> MattermostResult<T> {
        self.body.ok_or_else(|| {
            AppError::new(
                operation,
                "api.context.not_modified.app_error",
                "unexpected 304 response",
                StatusCode::NOT_MODIFIED.as_u16(),
            )
            .into()
        })
    }
}

/// Classify a raw response without decoding an entity.
///
/// 304 and 2xx pass through as metadata; anything >= 300 is parsed as the
/// error envelope (with a synthesized fallback for unparseable bodies).
pub fn classify_response(operation: &str, raw: RawResponse) -> MattermostResult<ResponseMeta> {
    let meta = raw.meta();
    if raw.status == StatusCode::NOT_MODIFIED {
        return Ok(meta);
    }
    if raw.status.as_u16() >= 300 {
        return Err(AppError::from_body(operation, raw.status.as_u16(), &raw.body).into());
    }
    Ok(meta)
}

/// Classify a raw response and decode its body into `T`.
///
/// On 304 no decode is attempted and `body` is `None`. On >= 300 the body is
/// parsed as the error envelope and returned as an error. Decode failures of
/// a successful body surface as a marshaling error tagged with `operation`.
pub fn decode_response<T: DeserializeOwned>(
    operation: &str,
    raw: RawResponse,
) -> MattermostResult<ClientResponse<T>> {
    let meta = raw.meta();
    if raw.status == StatusCode::NOT_MODIFIED {
        debug!(operation, "response not modified");
        return Ok(ClientResponse { body: None, meta });
    }
    if raw.status.as_u16() >= 300 {
        return Err(AppError::from_body(operation, raw.status.as_u16(), &raw.body).into());
    }

    let body: T = serde_json::from_slice(&raw.body)
        .map_err(|e| SerializationError::decode(operation, e))?;
    Ok(ClientResponse {
        body: Some(body),
        meta,
    })
}

/// HTTP transport trait for issuing API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and return the raw, fully drained response
    async fn send(&self, request: ApiRequest) -> MattermostResult<RawResponse>;
}

/// Default transport implementation backed by reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> MattermostResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| NetworkError::Http(e.to_string()))?;

        Ok(Self { client })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: ApiRequest) -> MattermostResult<RawResponse> {
        let mut req_builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(etag) = &request.etag {
            req_builder = req_builder.header(HEADER_ETAG_CLIENT, etag);
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = response.status();
        let headers = response.headers().clone();
        // Draining the body on every path keeps the connection reusable.
        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Http(e.to_string()))?;

        debug!(status = %status, body_len = body.len(), "received response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MattermostError;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: String,
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_REQUEST_ID, "req-1".parse().unwrap());
        headers.insert(HEADER_VERSION_ID, "9.5.0".parse().unwrap());
        headers.insert(HEADER_ETAG_SERVER, "\"etag-1\"".parse().unwrap());
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers,
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_meta_extraction() {
        let meta = raw(200, "{}").meta();
        assert_eq!(meta.status_code, 200);
        assert_eq!(meta.request_id.as_deref(), Some("req-1"));
        assert_eq!(meta.etag.as_deref(), Some("\"etag-1\""));
        assert_eq!(meta.server_version.as_deref(), Some("9.5.0"));
    }

    #[test]
    fn test_decode_success() {
        let response: ClientResponse<Probe> =
            decode_response("Client.Probe", raw(200, r#"{"value":"ok"}"#)).unwrap();
        assert_eq!(response.body.as_ref().unwrap().value, "ok");
        assert!(!response.is_not_modified());
    }

    #[test]
    fn test_not_modified_skips_decode() {
        // The body here is not valid JSON; 304 must never attempt a decode.
        let response: ClientResponse<Probe> =
            decode_response("Client.Probe", raw(304, "not json at all")).unwrap();
        assert!(response.body.is_none());
        assert!(response.is_not_modified());
    }

    #[test]
    fn test_error_status_yields_app_error() {
        let body = r#"{"id":"api.context.session_expired.app_error","message":"Invalid or expired session","status_code":401}"#;
        let err = decode_response::<Probe>("Client.GetMe", raw(401, body)).unwrap_err();
        match err {
            MattermostError::Api(app) => {
                assert_eq!(app.id, "api.context.session_expired.app_error");
                assert_eq!(app.status_code, 401);
                assert_eq!(app.operation, "Client.GetMe");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_status_with_garbage_body_falls_back() {
        let err = decode_response::<Probe>("Client.GetMe", raw(502, "bad gateway")).unwrap_err();
        match err {
            MattermostError::Api(app) => {
                assert_eq!(app.id, "model.utils.decode_json.app_error");
                assert!(app.detailed_error.contains("bad gateway"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failure_is_marshaling_error() {
        let err = decode_response::<Probe>("Client.Probe", raw(200, "[1,2,3]")).unwrap_err();
        assert!(matches!(err, MattermostError::Serialization(_)));
        assert!(err.to_string().contains("Client.Probe"));
    }

    #[test]
    fn test_classify_passes_2xx_and_304() {
        assert!(classify_response("Client.Follow", raw(200, "")).is_ok());
        assert!(classify_response("Client.Follow", raw(304, "")).is_ok());
        assert!(classify_response("Client.Follow", raw(403, "{}")).is_err());
    }

    #[test]
    fn test_with_etag_drops_empty() {
        let request = ApiRequest::get("http://x/api/v4/users/me", HeaderMap::new()).with_etag("");
        assert!(request.etag.is_none());

        let request =
            ApiRequest::get("http://x/api/v4/users/me", HeaderMap::new()).with_etag("\"e\"");
        assert_eq!(request.etag.as_deref(), Some("\"e\""));
    }
}
