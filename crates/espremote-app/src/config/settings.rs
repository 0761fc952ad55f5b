//! Settings parser for .espremote/config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use espremote_core::prelude::*;
use espremote_device::DeviceAddress;

const CONFIG_FILENAME: &str = "config.toml";
const ESPREMOTE_DIR: &str = ".espremote";

/// `<base_dir>/.espremote/config.toml`
pub fn default_settings_path(base_dir: &Path) -> PathBuf {
    base_dir.join(ESPREMOTE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.espremote/config.toml`.
///
/// A missing, unreadable or unparsable file yields defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = default_settings_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file.
///
/// The file must exist. Parse errors fall back to defaults like
/// [`load_settings`].
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(read_settings(path).unwrap_or_else(|e| {
        warn!("{}", e);
        Settings::default()
    }))
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;

    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))?;

    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Pick the device address: CLI override first, then settings.
pub fn resolve_device_address(
    cli_override: Option<&str>,
    settings: &Settings,
) -> Result<DeviceAddress> {
    let raw = cli_override.unwrap_or(&settings.device.address);
    let address = DeviceAddress::parse(raw)?;
    info!(
        "Device address: {} (from {})",
        address,
        if cli_override.is_some() {
            "command line"
        } else {
            "settings"
        }
    );
    Ok(address)
}
