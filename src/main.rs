//! ESP Remote - control an ESP32 over HTTP from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use esp_remote::{LaunchOptions, OneShot};
use espremote_core::prelude::*;
use espremote_core::ToggleState;

/// ESP Remote - toggle an output and send text to an ESP32 over HTTP
#[derive(Parser, Debug)]
#[command(name = "espremote", version)]
#[command(about = "Toggle an output and send text to an ESP32 over HTTP", long_about = None)]
struct Args {
    /// Device address as host or host:port (overrides settings)
    #[arg(long, value_name = "ADDR")]
    device: Option<String>,

    /// Settings file (default: .espremote/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Per-request timeout in milliseconds, 0 disables (overrides settings)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Run a single command instead of the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set the output on or off
    Toggle {
        #[arg(value_parser = parse_toggle_state)]
        state: ToggleState,
    },
    /// Send a text message
    Send {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

fn parse_toggle_state(value: &str) -> std::result::Result<ToggleState, String> {
    ToggleState::parse(value).ok_or_else(|| format!("expected on or off, got '{value}'"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    espremote_core::logging::init()?;

    let options = LaunchOptions {
        device: args.device,
        config: args.config,
        timeout_ms: args.timeout_ms,
    };

    let result = match args.command {
        None => esp_remote::run_tui(&options).await.map(|()| ExitCode::SUCCESS),
        Some(Command::Toggle { state }) => {
            esp_remote::run_command(&options, OneShot::Toggle(state)).await
        }
        Some(Command::Send { text }) => {
            esp_remote::run_command(&options, OneShot::Send(text)).await
        }
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("ESP Remote exiting");
    result
}
