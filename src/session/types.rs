//! Driver-level data types
//!
//! Request bodies and decoded payloads of the wire commands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON key of an element reference in the wire protocol
pub const ELEMENT_KEY: &str = "ELEMENT";

/// JSON key of an element reference in W3C-speaking servers
pub const W3C_ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Element locator strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    Id(String),
    Name(String),
    ClassName(String),
    CssSelector(String),
    XPath(String),
    LinkText(String),
    PartialLinkText(String),
    TagName(String),
}

impl By {
    pub fn strategy(&self) -> &'static str {
        match self {
            By::Id(_) => "id",
            By::Name(_) => "name",
            By::ClassName(_) => "class name",
            By::CssSelector(_) => "css selector",
            By::XPath(_) => "xpath",
            By::LinkText(_) => "link text",
            By::PartialLinkText(_) => "partial link text",
            By::TagName(_) => "tag name",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            By::Id(v)
            | By::Name(v)
            | By::ClassName(v)
            | By::CssSelector(v)
            | By::XPath(v)
            | By::LinkText(v)
            | By::PartialLinkText(v)
            | By::TagName(v) => v,
        }
    }

    /// Body of the element lookup commands
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "using": self.strategy(),
            "value": self.value(),
        })
    }
}

/// Desired capabilities sent when opening a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(Map<String, Value>);

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities requesting a browser by name
    pub fn browser<S: Into<String>>(browser_name: S) -> Self {
        Self::new()
            .with("browserName", browser_name.into())
            .with("javascriptEnabled", true)
    }

    pub fn firefox() -> Self {
        Self::browser("firefox")
    }

    pub fn chrome() -> Self {
        Self::browser("chrome")
    }

    pub fn with<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn browser_name(&self) -> Option<&str> {
        self.get("browserName").and_then(|v| v.as_str())
    }

    /// Body of the `newSession` command
    pub fn to_session_request(&self) -> Value {
        serde_json::json!({ "desiredCapabilities": self.0 })
    }
}

/// A browser cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(rename = "httpOnly", default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// Expiry in seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

impl Cookie {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
            secure: None,
            http_only: None,
            expiry: None,
        }
    }

    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain<S: Into<String>>(mut self, domain: S) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Timeout categories accepted by `setTimeouts`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutKind {
    PageLoad,
    Script,
    Implicit,
}

impl TimeoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeoutKind::PageLoad => "page load",
            TimeoutKind::Script => "script",
            TimeoutKind::Implicit => "implicit",
        }
    }
}

/// Screen orientation of mobile-capable sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Mouse button for the low-level mouse commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub fn code(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

/// One browser or driver log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
}

/// A session listed by the `getSessions` command
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionInfo {
    pub id: String,
    #[serde(default)]
    pub capabilities: Value,
}

/// Extract the element id from an element reference object
pub fn element_id(value: &Value) -> Option<&str> {
    value
        .get(ELEMENT_KEY)
        .or_else(|| value.get(W3C_ELEMENT_KEY))
        .and_then(|v| v.as_str())
}

/// Split text into the per-character key sequence the wire protocol expects
pub fn key_sequence(text: &str) -> Value {
    Value::Array(text.chars().map(|c| Value::String(c.to_string())).collect())
}
