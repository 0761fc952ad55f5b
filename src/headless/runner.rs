//! One-shot runner - issue a single request without the TUI
//!
//! Drives the same Engine / update() path as the TUI, forwarding engine
//! events to the output as NDJSON until the request resolves.

use std::io::Write;
use std::process::ExitCode;

use tracing::{info, warn};

use espremote_app::{Engine, EngineEvent, Message};
use espremote_core::prelude::*;
use espremote_core::ToggleState;
use espremote_device::DeviceClient;

use super::HeadlessEvent;

/// Device answered with 2xx
pub const EXIT_SUCCESS: u8 = 0;
/// Device answered with non-2xx or could not be reached
pub const EXIT_REQUEST_FAILED: u8 = 1;
/// Text was empty or whitespace-only; nothing was sent
pub const EXIT_EMPTY_MESSAGE: u8 = 2;

/// A single request to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneShot {
    Toggle(ToggleState),
    Send(String),
}

/// Run `command` and print NDJSON events to stdout
pub async fn run_one_shot<C>(engine: Engine<C>, command: OneShot) -> Result<ExitCode>
where
    C: DeviceClient + Sync + 'static,
{
    let mut stdout = std::io::stdout();
    let code = run_one_shot_with_output(engine, command, &mut stdout).await?;
    Ok(ExitCode::from(code))
}

/// Run `command`, writing NDJSON events to `out`, and return the exit status.
///
/// Startup sync is skipped: exactly one request is issued.
pub async fn run_one_shot_with_output<C, W>(
    mut engine: Engine<C>,
    command: OneShot,
    out: &mut W,
) -> Result<u8>
where
    C: DeviceClient + Sync + 'static,
    W: Write,
{
    info!("One-shot command: {:?}", command);
    let mut events = engine.subscribe();

    let message = match command {
        OneShot::Toggle(state) => Message::SetToggle(state),
        OneShot::Send(text) => {
            if text.trim().is_empty() {
                warn!("Refusing to send empty text");
                HeadlessEvent::error(Error::EmptyMessage.to_string(), false).write_to(out);
                return Ok(EXIT_EMPTY_MESSAGE);
            }
            engine.process_message(Message::SetPendingText(text));
            Message::SubmitText
        }
    };
    engine.process_message(message);

    let mut succeeded = None;
    loop {
        while let Ok(event) = events.try_recv() {
            if event.is_request_outcome() {
                succeeded = Some(matches!(event, EngineEvent::RequestSucceeded { .. }));
            }
            if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                headless.write_to(out);
            }
        }

        if !engine.has_pending_requests() || engine.should_quit() {
            break;
        }

        if !engine.process_next_message().await {
            engine.shutdown();
            return Err(Error::ChannelClosed);
        }
    }

    engine.shutdown();

    Ok(match succeeded {
        Some(true) => EXIT_SUCCESS,
        // Failed, or interrupted before the device answered
        _ => EXIT_REQUEST_FAILED,
    })
}
