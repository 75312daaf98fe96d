//! Element reference implementation
//!
//! A `WebElement` is the server-assigned element id bound to the session that
//! found it. Every operation is one wire command scoped by both.

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::command::Command;
use crate::session::handle::SessionHandle;
use crate::session::types::{element_id, key_sequence, By, Point, Size, ELEMENT_KEY};
use crate::{Error, Result};

/// Remote DOM element
#[derive(Debug, Clone)]
pub struct WebElement {
    id: String,
    session: Arc<SessionHandle>,
}

impl WebElement {
    pub(crate) fn new(id: String, session: Arc<SessionHandle>) -> Self {
        Self { id, session }
    }

    /// Build an element from a wire element reference
    pub(crate) fn from_value(value: &Value, session: &Arc<SessionHandle>) -> Result<Self> {
        let id = element_id(value)
            .ok_or_else(|| Error::unexpected_response(format!("not an element reference: {}", value)))?;
        Ok(Self::new(id.to_string(), Arc::clone(session)))
    }

    pub(crate) fn list_from_value(value: Value, session: &Arc<SessionHandle>) -> Result<Vec<Self>> {
        match value {
            Value::Array(items) => items.iter().map(|item| Self::from_value(item, session)).collect(),
            other => Err(Error::unexpected_response(format!(
                "expected a list of element references, got {}",
                other
            ))),
        }
    }

    /// Server-assigned element id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Session the element belongs to
    pub fn session_id(&self) -> &str {
        self.session.session_id()
    }

    /// Element reference as accepted in script arguments and command bodies
    pub fn to_json(&self) -> Value {
        let mut reference = serde_json::Map::new();
        reference.insert(ELEMENT_KEY.to_string(), Value::String(self.id.clone()));
        Value::Object(reference)
    }

    async fn execute(&self, command: Command, body: Option<Value>) -> Result<Value> {
        let context = self.session.context().with_id(self.id.as_str());
        self.session.execute(command, context, body).await
    }

    async fn execute_as<T: serde::de::DeserializeOwned>(&self, command: Command) -> Result<T> {
        let context = self.session.context().with_id(self.id.as_str());
        self.session.execute_as(command, context, None).await
    }

    /// Find the first descendant matching `by`
    pub async fn find_element(&self, by: By) -> Result<WebElement> {
        debug!("Finding child of {} by {} {:?}", self.id, by.strategy(), by.value());
        let value = self.execute(Command::FindChildElement, Some(by.to_json())).await?;
        Self::from_value(&value, &self.session)
    }

    /// Find every descendant matching `by`
    pub async fn find_elements(&self, by: By) -> Result<Vec<WebElement>> {
        let value = self.execute(Command::FindChildElements, Some(by.to_json())).await?;
        Self::list_from_value(value, &self.session)
    }

    pub async fn click(&self) -> Result<()> {
        self.execute(Command::ClickElement, None).await.map(|_| ())
    }

    pub async fn submit(&self) -> Result<()> {
        self.execute(Command::SubmitElement, None).await.map(|_| ())
    }

    /// Visible text
    pub async fn text(&self) -> Result<String> {
        self.execute_as(Command::GetElementText).await
    }

    /// Type `text` into the element
    pub async fn send_keys(&self, text: &str) -> Result<()> {
        self.execute(Command::SendKeysToElement, Some(json!({ "value": key_sequence(text) })))
            .await
            .map(|_| ())
    }

    pub async fn tag_name(&self) -> Result<String> {
        self.execute_as(Command::GetElementTagName).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.execute(Command::ClearElement, None).await.map(|_| ())
    }

    pub async fn is_selected(&self) -> Result<bool> {
        self.execute_as(Command::IsElementSelected).await
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        self.execute_as(Command::IsElementEnabled).await
    }

    pub async fn is_displayed(&self) -> Result<bool> {
        self.execute_as(Command::IsElementDisplayed).await
    }

    /// Attribute value, `None` when the attribute is absent
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let context = self.session.context().with_id(self.id.as_str()).with_name(name);
        self.session
            .execute_as(Command::GetElementAttribute, context, None)
            .await
    }

    /// Computed value of a CSS property
    pub async fn css_value(&self, property: &str) -> Result<String> {
        let context = self
            .session
            .context()
            .with_id(self.id.as_str())
            .with_property_name(property);
        self.session
            .execute_as(Command::GetElementValueOfCssProperty, context, None)
            .await
    }

    /// Whether both references point at the same DOM node
    pub async fn equals(&self, other: &WebElement) -> Result<bool> {
        let context = self
            .session
            .context()
            .with_id(self.id.as_str())
            .with_other(other.id.as_str());
        self.session.execute_as(Command::ElementEquals, context, None).await
    }

    /// Top-left corner relative to the page
    pub async fn location(&self) -> Result<Point> {
        self.execute_as(Command::GetElementLocation).await
    }

    /// Location after scrolling the element into view
    pub async fn location_in_view(&self) -> Result<Point> {
        self.execute_as(Command::GetElementLocationInView).await
    }

    pub async fn size(&self) -> Result<Size> {
        self.execute_as(Command::GetElementSize).await
    }
}

impl PartialEq for WebElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.session_id() == other.session_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    fn handle() -> Arc<SessionHandle> {
        Arc::new(SessionHandle::new(Arc::new(MockTransport::new()), "S1".to_string()))
    }

    #[test]
    fn test_from_value() {
        let element = WebElement::from_value(&json!({ "ELEMENT": "7" }), &handle()).unwrap();
        assert_eq!(element.id(), "7");
        assert_eq!(element.session_id(), "S1");
        assert_eq!(element.to_json(), json!({ "ELEMENT": "7" }));
    }

    #[test]
    fn test_from_value_rejects_non_reference() {
        let err = WebElement::from_value(&json!({ "id": "7" }), &handle()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn test_list_from_value() {
        let session = handle();
        let elements =
            WebElement::list_from_value(json!([{ "ELEMENT": "1" }, { "ELEMENT": "2" }]), &session).unwrap();
        assert_eq!(elements.iter().map(|e| e.id()).collect::<Vec<_>>(), vec!["1", "2"]);

        assert!(WebElement::list_from_value(json!({ "ELEMENT": "1" }), &session).is_err());
    }
}
