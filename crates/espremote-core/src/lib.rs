//! # espremote-core - Core Domain Types
//!
//! Foundation crate for ESP Remote. Provides domain types, error handling,
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConnectionStatus`] - Residue of the last resolved request (Connected / Disconnected)
//! - [`ToggleState`] - The boolean output mirrored to the device (On / Off)
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//! - [`ActivityEntry`], [`ActivityLevel`] - Request outcome records shown in the UI
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use espremote_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all ESP Remote crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{ActivityEntry, ActivityLevel, AppPhase, ConnectionStatus, ToggleState};
