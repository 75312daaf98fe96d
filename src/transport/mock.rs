//! Mock transport for testing
//!
//! Records every request and answers from canned per-route responses.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::traits::{Transport, WireResponse};
use crate::command::{Method, ResolvedRequest};
use crate::Result;

/// A request as seen by the mock transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Mock transport
///
/// Unrouted requests succeed with a `null` value, except `POST session`,
/// which opens a fresh session echoing the desired capabilities.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), WireResponse>>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method url` with a successful `value`
    pub async fn respond_with(&self, method: Method, url: &str, value: Value) {
        self.respond_with_wire(method, url, WireResponse::success(value)).await;
    }

    /// Answer `method url` with a raw wire response
    pub async fn respond_with_wire(&self, method: Method, url: &str, response: WireResponse) {
        self.routes
            .lock()
            .await
            .insert((method, url.to_string()), response);
    }

    /// Every request received so far, oldest first
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().await.clone()
    }

    /// Most recent request
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.recorded.lock().await.last().cloned()
    }

    fn open_session(body: Option<&Value>) -> WireResponse {
        let capabilities = body
            .and_then(|b| b.get("desiredCapabilities"))
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}));

        WireResponse {
            session_id: Some(uuid::Uuid::new_v4().to_string()),
            status: 0,
            value: capabilities,
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &ResolvedRequest, body: Option<Value>) -> Result<WireResponse> {
        let routed = self
            .routes
            .lock()
            .await
            .get(&(request.method, request.url.clone()))
            .cloned();

        let response = match routed {
            Some(response) => response,
            None if request.method == Method::Post && request.url == "session" => {
                Self::open_session(body.as_ref())
            }
            None => WireResponse::success(Value::Null),
        };

        self.recorded.lock().await.push(RecordedRequest {
            method: request.method,
            url: request.url.clone(),
            body,
        });

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::WireStatus;

    fn request(method: Method, url: &str) -> ResolvedRequest {
        ResolvedRequest {
            method,
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_routed_response() {
        let transport = MockTransport::new();
        transport
            .respond_with(Method::Get, "session/S1/title", Value::from("Mock Page"))
            .await;

        let response = transport
            .execute(&request(Method::Get, "session/S1/title"), None)
            .await
            .unwrap();
        assert_eq!(response.into_value().unwrap(), Value::from("Mock Page"));
    }

    #[tokio::test]
    async fn test_default_and_recording() {
        let transport = MockTransport::new();
        let body = serde_json::json!({ "url": "https://example.com" });

        let response = transport
            .execute(&request(Method::Post, "session/S1/url"), Some(body.clone()))
            .await
            .unwrap();
        assert_eq!(response.value, Value::Null);

        let last = transport.last_request().await.unwrap();
        assert_eq!(last.url, "session/S1/url");
        assert_eq!(last.body, Some(body));
    }

    #[tokio::test]
    async fn test_new_session_echoes_capabilities() {
        let transport = MockTransport::new();
        let body = serde_json::json!({ "desiredCapabilities": { "browserName": "firefox" } });

        let response = transport
            .execute(&request(Method::Post, "session"), Some(body))
            .await
            .unwrap();
        assert!(response.session_id.is_some());
        assert_eq!(response.value["browserName"], "firefox");
    }

    #[tokio::test]
    async fn test_failure_route() {
        let transport = MockTransport::new();
        transport
            .respond_with_wire(
                Method::Post,
                "session/S1/accept_alert",
                WireResponse::failure(WireStatus::NoAlertOpen, "no alert"),
            )
            .await;

        let response = transport
            .execute(&request(Method::Post, "session/S1/accept_alert"), None)
            .await
            .unwrap();
        assert_eq!(response.wire_status(), WireStatus::NoAlertOpen);
    }
}
