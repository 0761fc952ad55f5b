//! ESP Remote Library
//!
//! Controls an ESP32-class device over plain HTTP, either through the
//! terminal UI or with one-shot commands.

pub mod headless;

use std::path::PathBuf;
use std::process::ExitCode;

use espremote_app::config::{self, Settings};
use espremote_app::Engine;
use espremote_core::prelude::*;
use espremote_device::HttpDeviceClient;

pub use headless::runner::{run_one_shot, OneShot};

/// Command-line overrides applied on top of the settings file
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Device address (`host[:port]`)
    pub device: Option<String>,
    /// Explicit settings file; must exist
    pub config: Option<PathBuf>,
    /// Per-request timeout in milliseconds, 0 disables
    pub timeout_ms: Option<u64>,
}

/// Load settings and apply command-line overrides that live in settings
pub fn load_settings(options: &LaunchOptions) -> Result<Settings> {
    let mut settings = match &options.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings(&std::env::current_dir()?),
    };

    if let Some(timeout_ms) = options.timeout_ms {
        settings.device.timeout_ms = timeout_ms;
    }

    Ok(settings)
}

/// Resolve configuration and build an Engine talking HTTP to the device.
///
/// Configuration errors surface here, before any terminal setup.
pub fn build_engine(options: &LaunchOptions) -> Result<Engine<HttpDeviceClient>> {
    let settings = load_settings(options)?;
    let address = config::resolve_device_address(options.device.as_deref(), &settings)?;
    let client = HttpDeviceClient::new(address.clone(), settings.device.timeout())?;

    Ok(Engine::new(settings, &address, client))
}

/// Run the terminal UI
pub async fn run_tui(options: &LaunchOptions) -> Result<()> {
    let engine = build_engine(options)?;
    espremote_tui::run(engine).await
}

/// Run a single command and report the outcome as NDJSON
pub async fn run_command(options: &LaunchOptions, command: OneShot) -> Result<ExitCode> {
    let engine = match build_engine(options) {
        Ok(engine) => engine,
        Err(e) => {
            headless::HeadlessEvent::error(e.to_string(), true).emit();
            return Err(e);
        }
    };
    run_one_shot(engine, command).await
}
