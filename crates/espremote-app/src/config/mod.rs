//! Configuration file parsing for ESP Remote
//!
//! Supports:
//! - `.espremote/config.toml` - Device address, request timeout, behavior and UI settings
//! - An explicit settings file passed with `--config`

pub mod settings;
pub mod types;

pub use settings::{
    default_settings_path, load_settings, load_settings_from, resolve_device_address,
};
pub use types::*;
