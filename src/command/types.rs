//! Command layer type definitions
//!
//! Data carried between the command table, the resolver and the transport.

use std::fmt;

/// HTTP method of a wire command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Placeholder roles that may appear in a url template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    SessionId,
    Id,
    Name,
    PropertyName,
    Other,
}

impl Placeholder {
    /// Every placeholder, in substitution order
    pub const ALL: [Placeholder; 5] = [
        Placeholder::SessionId,
        Placeholder::Id,
        Placeholder::Name,
        Placeholder::PropertyName,
        Placeholder::Other,
    ];

    /// Token text as written in a template
    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::SessionId => ":sessionId",
            Placeholder::Id => ":id",
            Placeholder::Name => ":name",
            Placeholder::PropertyName => ":propertyName",
            Placeholder::Other => ":other",
        }
    }

    /// Match a whole path segment against the fixed token set
    pub fn from_token(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == segment)
    }
}

/// One supported operation: HTTP method plus url template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    pub method: Method,
    pub template: &'static str,
}

impl CommandSpec {
    pub const fn new(method: Method, template: &'static str) -> Self {
        Self { method, template }
    }
}

/// Per-call substitution values
///
/// Only the session id is required; the rest are used by the templates that
/// reference them and ignored everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionContext {
    pub session_id: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub property_name: Option<String>,
    pub other: Option<String>,
}

impl SubstitutionContext {
    /// Context scoped to a session
    pub fn new<S: Into<String>>(session_id: S) -> Self {
        Self {
            session_id: Some(session_id.into()),
            ..Default::default()
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_property_name<S: Into<String>>(mut self, property_name: S) -> Self {
        self.property_name = Some(property_name.into());
        self
    }

    pub fn with_other<S: Into<String>>(mut self, other: S) -> Self {
        self.other = Some(other.into());
        self
    }

    /// Value supplied for a placeholder role
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        match placeholder {
            Placeholder::SessionId => self.session_id.as_deref(),
            Placeholder::Id => self.id.as_deref(),
            Placeholder::Name => self.name.as_deref(),
            Placeholder::PropertyName => self.property_name.as_deref(),
            Placeholder::Other => self.other.as_deref(),
        }
    }
}

/// A command ready to hand to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: Method,
    /// Path relative to the server base address
    pub url: String,
}

impl fmt::Display for ResolvedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_from_token() {
        assert_eq!(Placeholder::from_token(":sessionId"), Some(Placeholder::SessionId));
        assert_eq!(Placeholder::from_token(":propertyName"), Some(Placeholder::PropertyName));
        assert_eq!(Placeholder::from_token(":session"), None);
        assert_eq!(Placeholder::from_token("id"), None);
    }

    #[test]
    fn test_context_builder() {
        let ctx = SubstitutionContext::new("S1").with_id("E7").with_other("E9");
        assert_eq!(ctx.get(Placeholder::SessionId), Some("S1"));
        assert_eq!(ctx.get(Placeholder::Id), Some("E7"));
        assert_eq!(ctx.get(Placeholder::Other), Some("E9"));
        assert_eq!(ctx.get(Placeholder::Name), None);
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Delete), reqwest::Method::DELETE);
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
