//! Mock implementations for testing.
//!
//! Provides a queue-backed mock transport that records every request it
//! receives.

use crate::errors::{MattermostResult, NetworkError};
use crate::transport::{
    ApiRequest, HttpTransport, RawResponse, HEADER_ETAG_SERVER, HEADER_REQUEST_ID,
};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Simulated network failure message; returned instead of a response
    pub network_error: Option<String>,
}

impl MockResponse {
    /// Create a successful JSON response from a serializable value
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::ok(serde_json::to_string(data).unwrap())
    }

    /// Create a 200 response with a raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            headers: Vec::new(),
            network_error: None,
        }
    }

    /// Create a response with an arbitrary status and body
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: Vec::new(),
            network_error: None,
        }
    }

    /// Create a 304 Not Modified response carrying the given etag
    pub fn not_modified(etag: &str) -> Self {
        Self::status(304, "").with_header(HEADER_ETAG_SERVER, etag)
    }

    /// Create an API error-envelope response
    pub fn app_error(status: u16, id: &str, message: &str) -> Self {
        Self::status(
            status,
            format!(
                r#"{{"id":"{}","message":"{}","status_code":{}}}"#,
                id, message, status
            ),
        )
    }

    /// Create a simulated network failure
    pub fn network_error(message: &str) -> Self {
        Self {
            status: 0,
            body: String::new(),
            headers: Vec::new(),
            network_error: Some(message.to_string()),
        }
    }

    /// Add a response header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a request-id header
    pub fn with_request_id(self, request_id: &str) -> Self {
        self.with_header(HEADER_REQUEST_ID, request_id)
    }

    /// Add an etag header
    pub fn with_etag(self, etag: &str) -> Self {
        self.with_header(HEADER_ETAG_SERVER, etag)
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request method
    pub method: String,
    /// Request body
    pub body: Option<String>,
    /// Caching validator, when one was attached
    pub etag: Option<String>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Recorded requests
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Default response if queue is empty
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        let mut queue = self.responses.lock();
        for response in responses {
            queue.push_back(response);
        }
        drop(queue);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Set default response when queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of recorded requests
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn record_request(&self, request: &ApiRequest) {
        let header_vec: Vec<(String, String)> = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            body: request.body.clone(),
            etag: request.etag.clone(),
            headers: header_vec,
        });
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue.pop_front().or_else(|| self.default_response.clone())
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: ApiRequest) -> MattermostResult<RawResponse> {
        self.record_request(&request);

        let response = self.next_response().ok_or_else(|| {
            NetworkError::ConnectionFailed {
                message: "no mock response configured".to_string(),
            }
        })?;

        if let Some(message) = response.network_error {
            return Err(NetworkError::ConnectionFailed { message }.into());
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &response.headers {
            let name = name
                .parse::<http::header::HeaderName>()
                .expect("valid mock header name");
            let value = value
                .parse::<http::header::HeaderValue>()
                .expect("valid mock header value");
            headers.insert(name, value);
        }

        Ok(RawResponse {
            status: StatusCode::from_u16(response.status).expect("valid mock status"),
            headers,
            body: Bytes::from(response.body),
        })
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MattermostError;
    use crate::transport::decode_response;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe {
        value: String,
    }

    #[tokio::test]
    async fn test_mock_transport_json() {
        let transport = MockHttpTransport::new().add_json_response(&Probe {
            value: "test".to_string(),
        });

        let request = ApiRequest::get("http://localhost:8065/api/v4/users/me", HeaderMap::new());
        let raw = transport.send(request).await.unwrap();
        let response = decode_response::<Probe>("Probe", raw).unwrap();
        assert_eq!(response.body.unwrap().value, "test");
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport =
            MockHttpTransport::new().with_default_response(MockResponse::ok("{}"));

        let request = ApiRequest::get("http://localhost:8065/api/v4/users/me", HeaderMap::new())
            .with_etag("\"e-1\"");
        let _ = transport.send(request).await.unwrap();

        let requests = transport.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://localhost:8065/api/v4/users/me");
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].etag.as_deref(), Some("\"e-1\""));
    }

    #[tokio::test]
    async fn test_mock_transport_empty_queue_errors() {
        let transport = MockHttpTransport::new();
        let request = ApiRequest::get("http://localhost:8065/api/v4/users/me", HeaderMap::new());
        let result = transport.send(request).await;
        assert!(matches!(result, Err(MattermostError::Network(_))));
    }

    #[test]
    fn test_mock_transport_usable_from_sync_context() {
        let transport = MockHttpTransport::new().add_response(MockResponse::ok("{}"));
        let request = ApiRequest::get("http://localhost:8065/api/v4/users/me", HeaderMap::new());
        let raw = tokio_test::block_on(transport.send(request)).unwrap();
        assert_eq!(raw.status.as_u16(), 200);
    }

    #[tokio::test]
    async fn test_mock_transport_network_error() {
        let transport =
            MockHttpTransport::new().add_response(MockResponse::network_error("connection reset"));
        let request = ApiRequest::get("http://localhost:8065/api/v4/users/me", HeaderMap::new());
        let err = transport.send(request).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
