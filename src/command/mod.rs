//! # Command layer
//!
//! Maps logical wire-protocol commands to an HTTP method and a url template,
//! and resolves those templates against per-call values.
//!
//! ## Module structure
//! - `types`: methods, placeholders, specs, contexts and resolved requests
//! - `table`: the closed `Command` enumeration and its catalog
//! - `template`: url template tokenizer and renderer
//! - `resolver`: resolution entry points
//!
//! ## Example
//! ```rust
//! use wire_driver::command::{resolve, Command, Method, SubstitutionContext};
//!
//! let ctx = SubstitutionContext::new("S1").with_id("E7").with_name("value");
//! let request = resolve(Command::GetElementAttribute, &ctx).unwrap();
//! assert_eq!(request.method, Method::Get);
//! assert_eq!(request.url, "session/S1/element/E7/attribute/value");
//! ```

pub mod types;
pub mod table;
pub mod template;
pub mod resolver;


pub use types::{CommandSpec, Method, Placeholder, ResolvedRequest, SubstitutionContext};
pub use table::{lookup, validate_catalog, Command};
pub use template::{Segment, UrlTemplate};
pub use resolver::{resolve, resolve_named, resolve_unscoped};
