//! HTTP transport implementation
//!
//! Sends resolved commands to a wire protocol server with reqwest.

use super::status::WireStatus;
use super::traits::{Transport, WireResponse};
use crate::command::{Method, ResolvedRequest};
use crate::config::Config;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info, warn};

/// reqwest-backed transport bound to one server base address
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Server base address, always ending in `/`
    base_url: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for `server_url` with default timeouts
    ///
    /// # Arguments
    /// * `server_url` - Server base address (e.g., "http://localhost:4444/wd/hub/")
    pub fn new<S: Into<String>>(server_url: S) -> Result<Self> {
        let config = Config {
            server_url: server_url.into(),
            ..Config::default()
        };
        Self::from_config(&config)
    }

    /// Create a transport from the client configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = Self::normalize_base(&config.server_url)?;
        info!("Creating HTTP transport for {}", base_url);

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(Error::Http)?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute address of a resolved relative url
    pub fn endpoint(&self, url: &str) -> Result<Url> {
        self.base_url
            .join(url)
            .map_err(|e| Error::invalid_url(format!("{}: {}", url, e)))
    }

    fn normalize_base(server_url: &str) -> Result<Url> {
        let mut base = server_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let url = Url::parse(&base).map_err(|e| Error::invalid_url(format!("{}: {}", server_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_url(format!(
                "{}: unsupported scheme {}",
                server_url,
                url.scheme()
            )));
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ResolvedRequest, body: Option<Value>) -> Result<WireResponse> {
        let endpoint = self.endpoint(&request.url)?;
        debug!("Sending {} {}", request.method, endpoint);

        let mut builder = self
            .client
            .request(request.method.into(), endpoint)
            .header(ACCEPT, "application/json");

        match (request.method, body) {
            (Method::Post, body) => {
                builder = builder.json(&body.unwrap_or_else(|| serde_json::json!({})));
            }
            (_, Some(_)) => {
                debug!("Dropping request body for {}", request);
            }
            (_, None) => {}
        }

        let response = builder.send().await?;
        let http_status = response.status();
        let text = response.text().await?;

        debug!("Response {} for {}: {} bytes", http_status, request, text.len());

        if text.trim().is_empty() {
            if http_status.is_success() {
                return Ok(WireResponse::success(Value::Null));
            }
            return Err(Error::HttpStatus {
                status: http_status.as_u16(),
                body: text,
            });
        }

        match serde_json::from_str::<WireResponse>(&text) {
            // An HTTP failure whose body omits `status` still deserializes as success
            Ok(wire) if !http_status.is_success() && wire.wire_status().is_success() => {
                warn!("{} failed with HTTP {} and no wire status", request, http_status);
                Err(Error::protocol(WireStatus::UnknownError, wire.failure_message()))
            }
            Ok(wire) => {
                if !wire.wire_status().is_success() {
                    warn!("{} answered with status {}", request, wire.wire_status());
                }
                Ok(wire)
            }
            Err(e) if http_status.is_success() => Err(Error::unexpected_response(format!(
                "{} returned a body that is not a wire response: {}",
                request, e
            ))),
            Err(_) => Err(Error::HttpStatus {
                status: http_status.as_u16(),
                body: text,
            }),
        }
    }
}
