//! Transport layer traits
//!
//! This module defines the interface between resolved commands and the HTTP
//! client that delivers them.

use super::status::WireStatus;
use crate::command::ResolvedRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded wire protocol response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireResponse {
    /// Session the response belongs to
    #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Wire status code (0 on success)
    #[serde(default)]
    pub status: i64,
    /// Command payload, or error details on failure
    #[serde(default)]
    pub value: Value,
}

impl WireResponse {
    /// Successful response carrying `value`
    pub fn success(value: Value) -> Self {
        Self {
            session_id: None,
            status: 0,
            value,
        }
    }

    /// Failed response with the given status and message
    pub fn failure(status: WireStatus, message: &str) -> Self {
        Self {
            session_id: None,
            status: status.code(),
            value: serde_json::json!({ "message": message }),
        }
    }

    pub fn wire_status(&self) -> WireStatus {
        WireStatus::from_code(self.status)
    }

    /// Payload of a successful response, or the remote failure as an error
    pub fn into_value(self) -> Result<Value> {
        let status = self.wire_status();
        if status.is_success() {
            return Ok(self.value);
        }

        Err(Error::protocol(status, self.failure_message()))
    }

    /// Error text carried in `value`: its `message` field, or the whole value
    pub fn failure_message(&self) -> String {
        match self.value.get("message").and_then(|m| m.as_str()) {
            Some(message) => message.to_string(),
            None => self.value.to_string(),
        }
    }
}

/// Transport trait
///
/// Delivers a resolved command to the remote end. Implementations prefix the
/// relative url with their server base address and encode `body` as JSON.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Send one command and decode the response body
    async fn execute(&self, request: &ResolvedRequest, body: Option<Value>) -> Result<WireResponse>;
}
