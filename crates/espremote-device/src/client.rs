//! Device request operations
//!
//! This module provides the DeviceClient trait for issuing the two device
//! requests. The app layer only sees this trait; the TUI and one-shot runners
//! hand it an [`HttpDeviceClient`], tests hand it a fake.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use espremote_core::prelude::*;
use espremote_core::ToggleState;

use crate::address::DeviceAddress;
use crate::encoding::{encode_message_body, FORM_CONTENT_TYPE};

/// Per-request timeout used when settings do not specify one
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Device request operations
///
/// Each call issues exactly one request. `Ok(())` means the device answered
/// with a 2xx status; any other status is [`Error::HttpStatus`] and any
/// network-level failure is [`Error::Transport`]. Response bodies are ignored.
#[trait_variant::make(DeviceClient: Send)]
pub trait LocalDeviceClient {
    /// `GET /toggle?state=ON|OFF`
    async fn send_toggle(&self, state: ToggleState) -> Result<()>;

    /// `POST /text` with a `message=<text>` form body
    async fn send_text(&self, text: &str) -> Result<()>;
}

/// reqwest-backed client for a single device
#[derive(Debug, Clone)]
pub struct HttpDeviceClient {
    http: reqwest::Client,
    address: DeviceAddress,
}

impl HttpDeviceClient {
    /// Build a client for `address`.
    ///
    /// `timeout` of `None` leaves requests unbounded, matching a platform
    /// that enforces no timeout of its own.
    pub fn new(address: DeviceAddress, timeout: Option<Duration>) -> Result<Self> {
        // The device sits on the local network; proxy env vars must not reroute it
        let mut builder = reqwest::Client::builder().no_proxy();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, address })
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }
}

impl DeviceClient for HttpDeviceClient {
    async fn send_toggle(&self, state: ToggleState) -> Result<()> {
        let url = self.address.toggle_url(state);
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(describe_transport_error)?;

        check_status(response.status())
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        let url = self.address.text_url();
        let body = encode_message_body(text);
        debug!("POST {} ({} byte body)", url, body.len());

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(describe_transport_error)?;

        check_status(response.status())
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::http_status(status.as_u16()))
    }
}

fn describe_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::transport("request timed out")
    } else if err.is_connect() {
        Error::transport(format!("connection failed: {err}"))
    } else {
        Error::transport(err.to_string())
    }
}
