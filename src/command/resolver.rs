//! Command resolver
//!
//! Turns a command and a substitution context into a method and a concrete
//! relative url. Pure: no I/O, no shared mutable state.

use super::table::Command;
use super::template::UrlTemplate;
use super::types::{Placeholder, ResolvedRequest, SubstitutionContext};
use crate::{Error, Result};
use tracing::debug;

/// Resolve a session-scoped command
///
/// Fails with [`Error::MissingSession`] when the context carries no session
/// id. Placeholders without a context value stay in the url as written, and
/// context values the template does not reference are ignored.
pub fn resolve(command: Command, context: &SubstitutionContext) -> Result<ResolvedRequest> {
    if context.session_id.is_none() {
        return Err(Error::MissingSession);
    }

    Ok(render(command, context))
}

/// Resolve a command given its wire identifier
///
/// The session check runs before the identifier is looked up.
pub fn resolve_named(name: &str, context: &SubstitutionContext) -> Result<ResolvedRequest> {
    if context.session_id.is_none() {
        return Err(Error::MissingSession);
    }

    let command: Command = name.parse()?;
    Ok(render(command, context))
}

/// Resolve one of the commands that run outside any session (`status`,
/// `newSession`, `getSessions`)
pub fn resolve_unscoped(command: Command) -> Result<ResolvedRequest> {
    let spec = command.spec();
    if UrlTemplate::parse(spec.template).references(Placeholder::SessionId) {
        return Err(Error::MissingSession);
    }

    Ok(render(command, &SubstitutionContext::default()))
}

fn render(command: Command, context: &SubstitutionContext) -> ResolvedRequest {
    let spec = command.spec();
    let url = UrlTemplate::parse(spec.template).render(context);
    debug!("Resolved {} to {} {}", command, spec.method, url);

    ResolvedRequest {
        method: spec.method,
        url,
    }
}
