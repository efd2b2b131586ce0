//! # Smart-Socket SSCP SDK
//!
//! A Rust implementation of the SmartSocket Control Protocol (SSCP),
//! providing the FFI command bridge and the TCP command server for
//! controlling a remote SmartSocket device.
//!
//! ## Features
//!
//! - **bridge** - Command bridge: async/sync clients plus the C ABI entry
//!   point for foreign host processes
//! - **server** - Command server: device state machine and TCP listener
//! - **full** - Enables all features
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! smart-socket = { version = "0.1.0", features = ["bridge"] }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run,ignore
//! // Add features to your Cargo.toml:
//! // smart-socket = { version = "0.1.0", features = ["bridge", "server"] }
//!
//! #[cfg(feature = "bridge")]
//! use smart_socket::sscp_bridge::AsyncSscpBridge;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Your SSCP application code here
//!     Ok(())
//! }
//! ```

// Re-export core protocol types (always available)
pub use sscp::*;

// Re-export optional components based on features
#[cfg(feature = "bridge")]
pub use sscp_bridge;

#[cfg(feature = "server")]
pub use sscp_server_core;

#[cfg(feature = "server")]
pub use sscp_server_tcp;

// Re-export commonly used dependencies for convenience
pub use thiserror;
pub use tokio;
pub use tracing;
