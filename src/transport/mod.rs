//! # Transport layer
//!
//! Delivers resolved commands to a remote wire protocol server over HTTP and
//! decodes the JSON response bodies.
//!
//! ## Module structure
//! - `traits`: the `Transport` trait and the decoded `WireResponse`
//! - `status`: wire protocol status codes
//! - `http`: reqwest implementation
//! - `mock`: recording mock for tests
//!
//! ## Example
//! ```rust,no_run
//! use wire_driver::command::{resolve_unscoped, Command};
//! use wire_driver::transport::{HttpTransport, Transport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new("http://localhost:4444/wd/hub/")?;
//! let request = resolve_unscoped(Command::Status)?;
//! let status = transport.execute(&request, None).await?.into_value()?;
//! println!("Server status: {}", status);
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod status;
pub mod http;
pub mod mock;

pub use traits::{Transport, WireResponse};
pub use status::WireStatus;
pub use http::HttpTransport;

// Re-export mock for development/testing
pub use mock::{MockTransport, RecordedRequest};
