//! Test utilities for device requests
//!
//! Provides an in-memory [`FakeDeviceClient`] that records every request and
//! answers with a scripted response. Requests can be held in flight to test
//! what the UI shows while a send is outstanding.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use espremote_core::prelude::*;
use espremote_core::ToggleState;

use crate::client::DeviceClient;

/// A request observed by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    Toggle(ToggleState),
    Text(String),
}

/// How the fake answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeResponse {
    /// 2xx
    Ok,
    /// Non-2xx with this status code
    Status(u16),
    /// Network-level failure
    Unreachable,
}

#[derive(Debug)]
struct Inner {
    calls: Mutex<Vec<DeviceCall>>,
    response: Mutex<FakeResponse>,
}

/// Scriptable stand-in for [`crate::HttpDeviceClient`].
///
/// Cheap to clone; clones share the call log and script.
#[derive(Debug, Clone)]
pub struct FakeDeviceClient {
    inner: Arc<Inner>,
    release_tx: Arc<watch::Sender<bool>>,
    release_rx: watch::Receiver<bool>,
}

impl FakeDeviceClient {
    /// A fake that answers every request with `response` immediately
    pub fn new(response: FakeResponse) -> Self {
        let (release_tx, release_rx) = watch::channel(true);
        Self {
            inner: Arc::new(Inner {
                calls: Mutex::new(Vec::new()),
                response: Mutex::new(response),
            }),
            release_tx: Arc::new(release_tx),
            release_rx,
        }
    }

    pub fn ok() -> Self {
        Self::new(FakeResponse::Ok)
    }

    pub fn status(code: u16) -> Self {
        Self::new(FakeResponse::Status(code))
    }

    pub fn unreachable() -> Self {
        Self::new(FakeResponse::Unreachable)
    }

    /// Change the response for subsequent requests
    pub fn respond_with(&self, response: FakeResponse) {
        *self.inner.response.lock().unwrap() = response;
    }

    /// Hold subsequent requests in flight until [`Self::release`] is called
    pub fn hold(&self) {
        let _ = self.release_tx.send(false);
    }

    /// Let held requests complete
    pub fn release(&self) {
        let _ = self.release_tx.send(true);
    }

    /// Every request received so far, in arrival order
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }

    async fn answer(&self, call: DeviceCall) -> Result<()> {
        self.inner.calls.lock().unwrap().push(call);

        let mut release_rx = self.release_rx.clone();
        let _ = release_rx.wait_for(|released| *released).await;

        match *self.inner.response.lock().unwrap() {
            FakeResponse::Ok => Ok(()),
            FakeResponse::Status(code) => Err(Error::http_status(code)),
            FakeResponse::Unreachable => Err(Error::transport("connection refused")),
        }
    }
}

impl DeviceClient for FakeDeviceClient {
    async fn send_toggle(&self, state: ToggleState) -> Result<()> {
        self.answer(DeviceCall::Toggle(state)).await
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        self.answer(DeviceCall::Text(text.to_string())).await
    }
}
