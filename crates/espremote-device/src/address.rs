//! Device address validation and endpoint URLs

use espremote_core::prelude::*;
use espremote_core::ToggleState;
use url::Url;

/// Address used when neither the CLI nor the settings file provide one.
///
/// This is the address an ESP32 hands out to itself in soft-AP mode.
pub const DEFAULT_DEVICE_ADDRESS: &str = "192.168.4.1";

const TOGGLE_PATH: &str = "/toggle";
const TEXT_PATH: &str = "/text";

/// A validated `host[:port]` pointing at the device.
///
/// Stored alongside the parsed `http://` base URL so building endpoint URLs
/// is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAddress {
    raw: String,
    base: Url,
}

impl DeviceAddress {
    /// Parse and validate an address.
    ///
    /// Accepts a bare host or `host:port`. Schemes, paths, queries and
    /// whitespace are rejected: the device is always reached over plain HTTP
    /// at its root.
    pub fn parse(address: &str) -> Result<Self> {
        let raw = address.trim();

        if raw.is_empty() {
            return Err(Error::invalid_address(address, "address is empty"));
        }
        if raw.contains("://") {
            return Err(Error::invalid_address(
                address,
                "scheme not allowed, use host or host:port",
            ));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(Error::invalid_address(address, "contains whitespace"));
        }
        if raw.contains(['/', '?', '#', '@']) {
            return Err(Error::invalid_address(
                address,
                "must not contain a path, query, fragment or credentials",
            ));
        }

        let base = Url::parse(&format!("http://{raw}/"))
            .map_err(|e| Error::invalid_address(address, e.to_string()))?;

        if base.host_str().map(str::is_empty).unwrap_or(true) {
            return Err(Error::invalid_address(address, "missing host"));
        }

        Ok(Self {
            raw: raw.to_string(),
            base,
        })
    }

    /// The address as given (trimmed)
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `http://<address>/`
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `http://<address>/toggle?state=ON|OFF`
    pub fn toggle_url(&self, state: ToggleState) -> Url {
        let mut url = self.base.clone();
        url.set_path(TOGGLE_PATH);
        url.set_query(Some(&format!("state={}", state.as_query_value())));
        url
    }

    /// `http://<address>/text`
    pub fn text_url(&self) -> Url {
        let mut url = self.base.clone();
        url.set_path(TEXT_PATH);
        url
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self {
            raw: DEFAULT_DEVICE_ADDRESS.to_string(),
            base: Url::parse(&format!("http://{DEFAULT_DEVICE_ADDRESS}/"))
                .unwrap_or_else(|_| unreachable!("default device address is a valid IPv4 host")),
        }
    }
}

impl std::fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for DeviceAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
