//! Remote session driver
//!
//! `WebDriver` is the caller of the command layer: every method picks a
//! command, fills a substitution context and hands the resolved request to
//! the transport.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::command::{resolve_unscoped, Command};
use crate::config::Config;
use crate::session::element::WebElement;
use crate::session::handle::{decode, SessionHandle};
use crate::session::types::{
    key_sequence, By, Capabilities, Cookie, LogEntry, MouseButton, Orientation, Point,
    SessionInfo, Size, TimeoutKind,
};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};

/// Frame to switch to
#[derive(Debug, Clone)]
pub enum FrameId {
    /// The top-level browsing context
    Default,
    Index(u16),
    /// Frame `name` or `id` attribute
    Name(String),
    Element(WebElement),
}

impl FrameId {
    fn to_json(&self) -> Value {
        match self {
            FrameId::Default => Value::Null,
            FrameId::Index(index) => json!(index),
            FrameId::Name(name) => json!(name),
            FrameId::Element(element) => element.to_json(),
        }
    }
}

/// One open session on a remote wire protocol server
#[derive(Debug, Clone)]
pub struct WebDriver {
    session: Arc<SessionHandle>,
    capabilities: Value,
}

impl WebDriver {
    /// Open a new session with the given desired capabilities
    pub async fn new_session(transport: Arc<dyn Transport>, desired: &Capabilities) -> Result<Self> {
        info!("Opening session (browser: {:?})", desired.browser_name());

        let request = resolve_unscoped(Command::NewSession)?;
        let response = transport
            .execute(&request, Some(desired.to_session_request()))
            .await?;

        let session_id = response.session_id.clone();
        let capabilities = response.into_value()?;

        let session_id = session_id
            .or_else(|| {
                capabilities
                    .get("sessionId")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .ok_or_else(|| Error::unexpected_response("newSession response carries no session id"))?;

        info!("Session {} opened", session_id);

        Ok(Self {
            session: Arc::new(SessionHandle::new(transport, session_id)),
            capabilities,
        })
    }

    /// Open a session on the server named by `config`
    pub async fn connect(config: &Config) -> Result<Self> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::from_config(config)?);
        let driver = Self::new_session(transport, &Capabilities::browser(config.browser_name.as_str())).await?;

        if let Some(wait) = config.implicit_wait {
            driver.set_implicit_wait(Duration::from_millis(wait)).await?;
        }

        Ok(driver)
    }

    /// Drive an already open session
    pub fn attach<S: Into<String>>(transport: Arc<dyn Transport>, session_id: S) -> Self {
        Self {
            session: Arc::new(SessionHandle::new(transport, session_id.into())),
            capabilities: Value::Null,
        }
    }

    /// Server build and readiness information
    pub async fn status(transport: &dyn Transport) -> Result<Value> {
        let request = resolve_unscoped(Command::Status)?;
        transport.execute(&request, None).await?.into_value()
    }

    /// Sessions currently open on the server
    pub async fn sessions(transport: &dyn Transport) -> Result<Vec<SessionInfo>> {
        let request = resolve_unscoped(Command::GetSessions)?;
        let value = transport.execute(&request, None).await?.into_value()?;
        decode(Command::GetSessions, value)
    }

    pub fn session_id(&self) -> &str {
        self.session.session_id()
    }

    /// Capabilities reported when the session was opened
    pub fn capabilities(&self) -> &Value {
        &self.capabilities
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        self.session.transport()
    }

    async fn execute(&self, command: Command, body: Option<Value>) -> Result<Value> {
        self.session.execute(command, self.session.context(), body).await
    }

    async fn execute_as<T: serde::de::DeserializeOwned>(&self, command: Command, body: Option<Value>) -> Result<T> {
        self.session.execute_as(command, self.session.context(), body).await
    }

    async fn run(&self, command: Command, body: Option<Value>) -> Result<()> {
        self.execute(command, body).await.map(|_| ())
    }

    // Session

    /// Fetch the session's capabilities again and cache them
    pub async fn refresh_capabilities(&mut self) -> Result<&Value> {
        self.capabilities = self.execute(Command::GetCapabilities, None).await?;
        Ok(&self.capabilities)
    }

    /// End the session
    pub async fn quit(self) -> Result<()> {
        info!("Closing session {}", self.session_id());
        self.run(Command::Quit, None).await
    }

    // Timeouts

    pub async fn set_timeout(&self, kind: TimeoutKind, timeout: Duration) -> Result<()> {
        debug!("Setting {} timeout to {:?}", kind.as_str(), timeout);
        self.run(
            Command::SetTimeouts,
            Some(json!({ "type": kind.as_str(), "ms": millis(timeout) })),
        )
        .await
    }

    pub async fn set_page_load_timeout(&self, timeout: Duration) -> Result<()> {
        self.set_timeout(TimeoutKind::PageLoad, timeout).await
    }

    pub async fn set_script_timeout(&self, timeout: Duration) -> Result<()> {
        self.set_timeout(TimeoutKind::Script, timeout).await
    }

    pub async fn set_async_script_timeout(&self, timeout: Duration) -> Result<()> {
        self.run(Command::SetAsyncScriptTimeout, Some(json!({ "ms": millis(timeout) })))
            .await
    }

    /// How long element lookups poll before failing with `NoSuchElement`
    pub async fn set_implicit_wait(&self, timeout: Duration) -> Result<()> {
        self.run(Command::SetImplicitWaitTimeout, Some(json!({ "ms": millis(timeout) })))
            .await
    }

    // Navigation

    pub async fn get(&self, url: &str) -> Result<()> {
        info!("Navigating to {}", url);
        self.run(Command::Get, Some(json!({ "url": url }))).await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.execute_as(Command::GetCurrentUrl, None).await
    }

    pub async fn back(&self) -> Result<()> {
        self.run(Command::GoBack, None).await
    }

    pub async fn forward(&self) -> Result<()> {
        self.run(Command::GoForward, None).await
    }

    pub async fn refresh(&self) -> Result<()> {
        self.run(Command::Refresh, None).await
    }

    pub async fn title(&self) -> Result<String> {
        self.execute_as(Command::GetTitle, None).await
    }

    pub async fn page_source(&self) -> Result<String> {
        self.execute_as(Command::GetPageSource, None).await
    }

    // Scripts

    /// Run a synchronous script in the page; elements in `args` are passed
    /// as element references via [`WebElement::to_json`]
    pub async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.execute(Command::ExecuteScript, Some(json!({ "script": script, "args": args })))
            .await
    }

    pub async fn execute_async_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.execute(
            Command::ExecuteAsyncScript,
            Some(json!({ "script": script, "args": args })),
        )
        .await
    }

    /// PNG screenshot of the current window
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        let encoded: String = self.execute_as(Command::Screenshot, None).await?;
        BASE64
            .decode(encoded.trim())
            .map_err(|e| Error::decode(format!("Failed to decode screenshot: {}", e)))
    }

    // Frames and windows

    pub async fn switch_to_frame(&self, frame: FrameId) -> Result<()> {
        self.run(Command::SwitchToFrame, Some(json!({ "id": frame.to_json() })))
            .await
    }

    pub async fn switch_to_parent_frame(&self) -> Result<()> {
        self.run(Command::SwitchToParentFrame, None).await
    }

    pub async fn window_handle(&self) -> Result<String> {
        self.execute_as(Command::GetCurrentWindowHandle, None).await
    }

    pub async fn window_handles(&self) -> Result<Vec<String>> {
        self.execute_as(Command::GetWindowHandles, None).await
    }

    pub async fn switch_to_window(&self, handle: &str) -> Result<()> {
        self.run(Command::SwitchToWindow, Some(json!({ "name": handle })))
            .await
    }

    /// Close the current window; the session stays open
    pub async fn close_window(&self) -> Result<()> {
        self.run(Command::CloseWindow, None).await
    }

    pub async fn window_size(&self) -> Result<Size> {
        self.execute_as(Command::GetWindowSize, None).await
    }

    pub async fn set_window_size(&self, width: u32, height: u32) -> Result<()> {
        self.run(
            Command::SetWindowSize,
            Some(json!({ "width": width, "height": height })),
        )
        .await
    }

    pub async fn window_position(&self) -> Result<Point> {
        self.execute_as(Command::GetWindowPosition, None).await
    }

    pub async fn set_window_position(&self, x: i32, y: i32) -> Result<()> {
        self.run(Command::SetWindowPosition, Some(json!({ "x": x, "y": y })))
            .await
    }

    pub async fn maximize_window(&self) -> Result<()> {
        self.run(Command::MaximizeWindow, None).await
    }

    // Cookies

    pub async fn cookies(&self) -> Result<Vec<Cookie>> {
        self.execute_as(Command::GetAllCookies, None).await
    }

    pub async fn add_cookie(&self, cookie: &Cookie) -> Result<()> {
        self.run(Command::AddCookie, Some(json!({ "cookie": cookie })))
            .await
    }

    pub async fn delete_all_cookies(&self) -> Result<()> {
        self.run(Command::DeleteAllCookies, None).await
    }

    pub async fn delete_cookie(&self, name: &str) -> Result<()> {
        let context = self.session.context().with_name(name);
        self.session
            .execute(Command::DeleteCookieNamed, context, None)
            .await
            .map(|_| ())
    }

    // Elements

    pub async fn find_element(&self, by: By) -> Result<WebElement> {
        debug!("Finding element by {} {:?}", by.strategy(), by.value());
        let value = self.execute(Command::FindElement, Some(by.to_json())).await?;
        WebElement::from_value(&value, &self.session)
    }

    pub async fn find_elements(&self, by: By) -> Result<Vec<WebElement>> {
        let value = self.execute(Command::FindElements, Some(by.to_json())).await?;
        WebElement::list_from_value(value, &self.session)
    }

    /// Element that currently has focus
    pub async fn active_element(&self) -> Result<WebElement> {
        let value = self.execute(Command::GetActiveElement, None).await?;
        WebElement::from_value(&value, &self.session)
    }

    pub async fn send_keys_to_active_element(&self, text: &str) -> Result<()> {
        self.run(
            Command::SendKeysToActiveElement,
            Some(json!({ "value": key_sequence(text) })),
        )
        .await
    }

    // Alerts

    pub async fn alert_text(&self) -> Result<String> {
        self.execute_as(Command::GetAlertText, None).await
    }

    /// Type into a `prompt()` dialog
    pub async fn set_alert_value(&self, text: &str) -> Result<()> {
        self.run(Command::SetAlertValue, Some(json!({ "text": text })))
            .await
    }

    pub async fn accept_alert(&self) -> Result<()> {
        self.run(Command::AcceptAlert, None).await
    }

    pub async fn dismiss_alert(&self) -> Result<()> {
        self.run(Command::DismissAlert, None).await
    }

    // Mouse

    /// Move the mouse to `element` (its center when no offset is given),
    /// or by `offset` from the current position when no element is given
    pub async fn move_to(&self, element: Option<&WebElement>, offset: Option<(i64, i64)>) -> Result<()> {
        let mut body = serde_json::Map::new();
        if let Some(element) = element {
            body.insert("element".to_string(), Value::String(element.id().to_string()));
        }
        if let Some((x, y)) = offset {
            body.insert("xoffset".to_string(), json!(x));
            body.insert("yoffset".to_string(), json!(y));
        }
        if body.is_empty() {
            warn!("move_to called without element or offset");
        }
        self.run(Command::MouseMoveTo, Some(Value::Object(body))).await
    }

    pub async fn mouse_click(&self, button: MouseButton) -> Result<()> {
        self.run(Command::MouseClick, Some(json!({ "button": button.code() })))
            .await
    }

    pub async fn double_click(&self) -> Result<()> {
        self.run(Command::MouseDoubleClick, None).await
    }

    pub async fn mouse_down(&self, button: MouseButton) -> Result<()> {
        self.run(Command::MouseButtonDown, Some(json!({ "button": button.code() })))
            .await
    }

    pub async fn mouse_up(&self, button: MouseButton) -> Result<()> {
        self.run(Command::MouseButtonUp, Some(json!({ "button": button.code() })))
            .await
    }

    // Orientation

    pub async fn orientation(&self) -> Result<Orientation> {
        self.execute_as(Command::GetScreenOrientation, None).await
    }

    pub async fn set_orientation(&self, orientation: Orientation) -> Result<()> {
        self.run(
            Command::SetScreenOrientation,
            Some(json!({ "orientation": orientation })),
        )
        .await
    }

    // Logs

    /// Drain the log of the given type (e.g. "browser", "driver")
    pub async fn log(&self, log_type: &str) -> Result<Vec<LogEntry>> {
        self.execute_as(Command::GetLog, Some(json!({ "type": log_type })))
            .await
    }

    pub async fn log_types(&self) -> Result<Vec<String>> {
        self.execute_as(Command::GetAvailableLogTypes, None).await
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
