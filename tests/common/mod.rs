//! Common test utilities
//!
//! A mock JSON Wire Protocol server speaking just enough HTTP/1.1 for the
//! integration tests, so no Selenium server is needed.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const SESSION_ID: &str = "mock-session";

/// A request as received by the mock server
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub method: String,
    /// Percent-decoded path below the hub prefix
    pub path: String,
    pub body: Option<Value>,
}

/// Mock wire protocol server
pub struct MockWireServer {
    base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockWireServer {
    /// Start a new mock server on an ephemeral port
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}/wd/hub/", addr);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let captured = requests.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, _)) => {
                                tokio::spawn(Self::handle_connection(stream, captured.clone()));
                            }
                            Err(e) => {
                                tracing::error!("Mock wire server: Accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = &mut shutdown_rx => break,
                }
            }
        });

        Ok(Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Base address including the `/wd/hub/` prefix
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    async fn handle_connection(mut stream: TcpStream, captured: Arc<Mutex<Vec<CapturedRequest>>>) {
        let request = match Self::read_request(&mut stream).await {
            Some(request) => request,
            None => return,
        };

        let (status, content_type, body) = Self::route(&request);
        captured.lock().unwrap().push(request);

        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            _ => "Internal Server Error",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            content_type,
            body.len(),
            body
        );

        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }

    async fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                return None;
            }
            buffer.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
        let mut lines = head.lines();
        let mut request_line = lines.next()?.split_whitespace();
        let method = request_line.next()?.to_string();
        let target = request_line.next()?.to_string();

        let content_length = lines
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buffer.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }

        let body_bytes = &buffer[header_end..];
        let body = if body_bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(body_bytes).ok()
        };

        let path = target.trim_start_matches("/wd/hub/");
        let path = urlencoding::decode(path).ok()?.into_owned();

        Some(CapturedRequest { method, path, body })
    }

    fn route(request: &CapturedRequest) -> (u16, &'static str, String) {
        const JSON: &str = "application/json;charset=UTF-8";
        let session = format!("session/{}", SESSION_ID);
        let sub = request
            .path
            .strip_prefix(&session)
            .map(|rest| rest.trim_start_matches('/'));

        let ok = |value: Value| {
            (
                200,
                JSON,
                json!({ "sessionId": SESSION_ID, "status": 0, "value": value }).to_string(),
            )
        };

        match (request.method.as_str(), request.path.as_str(), sub) {
            ("GET", "status", _) => (
                200,
                JSON,
                json!({ "status": 0, "value": { "build": { "version": "2.53.1" } } }).to_string(),
            ),
            ("POST", "session", _) => {
                let browser = request
                    .body
                    .as_ref()
                    .and_then(|b| b["desiredCapabilities"]["browserName"].as_str())
                    .unwrap_or("firefox")
                    .to_string();
                ok(json!({ "browserName": browser, "javascriptEnabled": true }))
            }
            ("DELETE", _, Some("")) => ok(Value::Null),
            // Some servers answer navigation with an empty body
            ("POST", _, Some("url")) => (200, JSON, String::new()),
            ("GET", _, Some("url")) => ok(json!("http://mock.test/")),
            ("GET", _, Some("title")) => ok(json!("Mock Page")),
            ("POST", _, Some("element")) => {
                let value = request
                    .body
                    .as_ref()
                    .and_then(|b| b["value"].as_str())
                    .unwrap_or_default();
                if value == "missing" {
                    (
                        500,
                        JSON,
                        json!({
                            "sessionId": SESSION_ID,
                            "status": 7,
                            "value": { "message": "Unable to locate element: missing" },
                        })
                        .to_string(),
                    )
                } else {
                    ok(json!({ "ELEMENT": "0" }))
                }
            }
            ("GET", _, Some("element/0/text")) => ok(json!("Hello")),
            ("GET", _, Some("element/0/attribute/href")) => ok(json!("/next")),
            // W3C-style failure: no wire `status` field in the body
            ("POST", _, Some("element/0/click")) => (
                500,
                JSON,
                json!({ "value": { "error": "unknown error", "message": "boom" } }).to_string(),
            ),
            ("DELETE", _, Some(rest)) if rest.starts_with("cookie/") => ok(Value::Null),
            _ => (
                404,
                "text/plain",
                format!("Unrecognized command: {} /{}", request.method, request.path),
            ),
        }
    }
}

impl Drop for MockWireServer {
    fn drop(&mut self) {
        self.stop();
    }
}
