//! Wire-Driver: Rust client for the JSON Wire Protocol
//!
//! This library drives a remote browser through a Selenium-style server:
//! commands are resolved from a fixed catalog of (method, url template)
//! routes and sent as JSON over HTTP.

pub mod error;
pub mod config;

pub mod command;
pub mod transport;
pub mod session;

// Re-exports
pub use error::{Error, Result};
pub use session::{By, Capabilities, WebDriver, WebElement};

/// Wire-Driver library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
