//! # Session layer
//!
//! Driver-facing API over one remote browser session: navigation, windows,
//! frames, cookies, scripts, alerts and element lookup. Each operation is
//! expressed as a wire command and resolved through the command layer.
//!
//! ## Core concepts
//! - **WebDriver**: one open session on the remote server
//! - **WebElement**: an element id bound to the session that found it
//! - **By**: element locator strategies
//!
//! ## Module structure
//! - `types`: locators, capabilities, cookies and other payloads
//! - `driver`: the session driver
//! - `element`: element operations
//!
//! ## Example
//! ```rust,no_run
//! use wire_driver::session::{By, Capabilities, WebDriver};
//! use wire_driver::transport::HttpTransport;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpTransport::new("http://localhost:4444/wd/hub/")?);
//! let driver = WebDriver::new_session(transport, &Capabilities::firefox()).await?;
//!
//! driver.get("https://example.com").await?;
//! let heading = driver.find_element(By::TagName("h1".to_string())).await?;
//! println!("Heading: {}", heading.text().await?);
//!
//! driver.quit().await?;
//! # Ok(())
//! # }
//! ```

mod handle;
pub mod types;
pub mod driver;
pub mod element;


pub use types::{
    By, Capabilities, Cookie, LogEntry, MouseButton, Orientation, Point, SessionInfo, Size,
    TimeoutKind,
};

// Re-export implementation structs
pub use driver::{FrameId, WebDriver};
pub use element::WebElement;
