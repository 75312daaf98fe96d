//! Session handle shared by a driver and its elements

use crate::command::{resolve, Command, SubstitutionContext};
use crate::transport::Transport;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Transport plus the id of one remote session
#[derive(Debug)]
pub(crate) struct SessionHandle {
    transport: Arc<dyn Transport>,
    session_id: String,
}

impl SessionHandle {
    pub(crate) fn new(transport: Arc<dyn Transport>, session_id: String) -> Self {
        Self {
            transport,
            session_id,
        }
    }

    pub(crate) fn session_id(&self) -> &str {
        &self.session_id
    }

    pub(crate) fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Substitution context scoped to this session
    pub(crate) fn context(&self) -> SubstitutionContext {
        SubstitutionContext::new(self.session_id.as_str())
    }

    /// Resolve and send a command, returning the payload of a successful response
    pub(crate) async fn execute(
        &self,
        command: Command,
        context: SubstitutionContext,
        body: Option<Value>,
    ) -> Result<Value> {
        let request = resolve(command, &context)?;
        self.transport.execute(&request, body).await?.into_value()
    }

    /// Like `execute`, decoding the payload into `T`
    pub(crate) async fn execute_as<T: DeserializeOwned>(
        &self,
        command: Command,
        context: SubstitutionContext,
        body: Option<Value>,
    ) -> Result<T> {
        let value = self.execute(command, context, body).await?;
        decode(command, value)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(command: Command, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| Error::unexpected_response(format!("{} payload: {}", command, e)))
}
