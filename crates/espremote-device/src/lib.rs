//! # espremote-device - Device HTTP Plumbing
//!
//! Talks to the ESP32 over plain HTTP. Knows the device's two endpoints and
//! nothing about UI state.
//!
//! Depends on [`espremote_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Addressing
//! - [`DeviceAddress`] - Validated `host[:port]` with endpoint URL builders
//! - [`DEFAULT_DEVICE_ADDRESS`] - Compile-time default address
//!
//! ### Wire Format
//! - [`encode_message_body()`] - `message=<percent-encoded>` form body
//!
//! ### Client
//! - [`DeviceClient`] / [`LocalDeviceClient`] - Request seam used by the app layer
//! - [`HttpDeviceClient`] - reqwest implementation

pub mod address;
pub mod client;
pub mod encoding;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use address::{DeviceAddress, DEFAULT_DEVICE_ADDRESS};
pub use client::{DeviceClient, HttpDeviceClient, LocalDeviceClient, DEFAULT_TIMEOUT_MS};
pub use encoding::{encode_message_body, FORM_CONTENT_TYPE};
