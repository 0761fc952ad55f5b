//! Engine - shared orchestration state for TUI and one-shot runners
//!
//! The Engine owns the application state, the message channel, the device
//! client and the loaded settings. Both runners feed it messages and read
//! state back; neither talks to the device directly.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use espremote_device::{DeviceAddress, DeviceClient};

use crate::config::Settings;
use crate::engine_event::{EngineEvent, RequestKind};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::UpdateAction;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the engine event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for ESP Remote.
///
/// Generic over the device client so tests can drive it with a fake.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, request tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    client: Arc<C>,

    /// Requests dispatched whose outcome has not been processed yet
    in_flight: usize,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<C> Engine<C>
where
    C: DeviceClient + Sync + 'static,
{
    /// Create a new Engine talking to `address` through `client`.
    ///
    /// Must be called inside a tokio runtime: the signal handler is spawned
    /// here.
    pub fn new(settings: Settings, address: &DeviceAddress, client: C) -> Self {
        let mut state = AppState::with_settings(settings.clone());
        state.device_address = address.to_string();

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!("Engine ready for device at {}", address);

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            client: Arc::new(client),
            in_flight: 0,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Events are broadcast after each message processing cycle. A
    /// subscriber that falls behind loses the oldest events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Send the initial toggle state once, if enabled in settings
    pub fn start(&mut self) {
        if self.settings.behavior.sync_on_startup {
            debug!("Syncing initial toggle state to device");
            self.process_message(Message::SyncDevice);
        }
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits `EngineEvent`s for request outcomes, newly dispatched requests
    /// and connectivity changes.
    pub fn process_message(&mut self, msg: Message) {
        let connection_before = self.state.control.connection;

        if let Some(event) = outcome_event(&msg) {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.emit(event);
        }

        let dispatched =
            process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);

        for action in dispatched {
            self.in_flight += 1;
            self.emit(EngineEvent::RequestStarted {
                request: request_kind(action),
            });
        }

        let connection_after = self.state.control.connection;
        if connection_before != connection_after {
            self.emit(EngineEvent::ConnectionChanged {
                old: connection_before,
                new: connection_after,
            });
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` if the channel is closed.
    pub async fn process_next_message(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Whether any dispatched request is still waiting for its outcome
    pub fn has_pending_requests(&self) -> bool {
        self.in_flight > 0
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers.
    ///
    /// In-flight requests are not cancelled; their tasks end with the runtime.
    pub fn shutdown(&mut self) {
        if self.in_flight > 0 {
            debug!("Shutting down with {} request(s) in flight", self.in_flight);
        }
        self.emit(EngineEvent::Shutdown);
        info!("Engine shut down");
    }

    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

fn request_kind(action: UpdateAction) -> RequestKind {
    match action {
        UpdateAction::SendToggle { state } => RequestKind::Toggle { state },
        UpdateAction::SendText { text } => RequestKind::Text { text },
    }
}

/// The event reported for a request outcome message
fn outcome_event(msg: &Message) -> Option<EngineEvent> {
    let event = match msg {
        Message::ToggleCompleted { state } => EngineEvent::RequestSucceeded {
            request: RequestKind::Toggle { state: *state },
        },
        Message::ToggleFailed { state, error } => EngineEvent::RequestFailed {
            request: RequestKind::Toggle { state: *state },
            error: error.clone(),
        },
        Message::TextSent { text } => EngineEvent::RequestSucceeded {
            request: RequestKind::Text { text: text.clone() },
        },
        Message::TextSendFailed { text, error } => EngineEvent::RequestFailed {
            request: RequestKind::Text { text: text.clone() },
            error: error.clone(),
        },
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use espremote_core::{ConnectionStatus, ToggleState};
    use espremote_device::test_utils::{DeviceCall, FakeDeviceClient, FakeResponse};

    fn engine_with(fake: &FakeDeviceClient) -> Engine<FakeDeviceClient> {
        Engine::new(Settings::default(), &DeviceAddress::default(), fake.clone())
    }

    /// Process messages until no request is outstanding
    async fn settle(engine: &mut Engine<FakeDeviceClient>) {
        while engine.has_pending_requests() {
            let processed =
                tokio::time::timeout(Duration::from_secs(2), engine.process_next_message())
                    .await
                    .expect("request outcome never arrived");
            assert!(processed);
        }
    }

    #[tokio::test]
    async fn test_flip_toggle_sends_one_request_and_connects() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::FlipToggle);
        settle(&mut engine).await;

        assert_eq!(fake.calls(), vec![DeviceCall::Toggle(ToggleState::On)]);
        assert_eq!(engine.state.control.toggle, ToggleState::On);
        assert_eq!(engine.state.control.connection, ConnectionStatus::Connected);
    }

    #[tokio::test]
    async fn test_toggle_unreachable_disconnects_without_reverting() {
        let fake = FakeDeviceClient::unreachable();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::FlipToggle);
        settle(&mut engine).await;

        assert_eq!(engine.state.control.toggle, ToggleState::On);
        assert_eq!(engine.state.control.connection, ConnectionStatus::Disconnected);
        assert_eq!(engine.state.activity.len(), 1);
    }

    #[tokio::test]
    async fn test_startup_sync_sends_off() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);

        engine.start();
        settle(&mut engine).await;

        assert_eq!(fake.calls(), vec![DeviceCall::Toggle(ToggleState::Off)]);
        assert_eq!(engine.state.control.connection, ConnectionStatus::Connected);
    }

    #[tokio::test]
    async fn test_startup_sync_disabled() {
        let fake = FakeDeviceClient::ok();
        let mut settings = Settings::default();
        settings.behavior.sync_on_startup = false;
        let mut engine = Engine::new(settings, &DeviceAddress::default(), fake.clone());

        engine.start();

        assert!(!engine.has_pending_requests());
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_submit_issues_nothing() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::SetPendingText("  \t ".to_string()));
        engine.process_message(Message::SubmitText);

        assert!(!engine.has_pending_requests());
        assert_eq!(fake.call_count(), 0);
        assert_eq!(engine.state.control.pending_text, "  \t ");
        assert!(!engine.state.control.is_sending);
    }

    #[tokio::test]
    async fn test_submit_success_updates_state() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::SetPendingText("hello world".to_string()));
        engine.process_message(Message::SubmitText);
        settle(&mut engine).await;

        let control = &engine.state.control;
        assert_eq!(control.pending_text, "");
        assert_eq!(control.last_sent_text.as_deref(), Some("hello world"));
        assert_eq!(control.connection, ConnectionStatus::Connected);
        assert!(!control.is_sending);
        assert_eq!(
            fake.calls(),
            vec![DeviceCall::Text("hello world".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_server_error_keeps_last_sent() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::SetPendingText("first".to_string()));
        engine.process_message(Message::SubmitText);
        settle(&mut engine).await;

        fake.respond_with(FakeResponse::Status(500));
        engine.process_message(Message::SetPendingText("second".to_string()));
        engine.process_message(Message::SubmitText);
        settle(&mut engine).await;

        let control = &engine.state.control;
        assert_eq!(control.last_sent_text.as_deref(), Some("first"));
        assert_eq!(control.pending_text, "second");
        assert_eq!(control.connection, ConnectionStatus::Disconnected);
        assert!(!control.is_sending);
    }

    #[tokio::test]
    async fn test_send_disabled_while_in_flight() {
        let fake = FakeDeviceClient::ok();
        fake.hold();
        let mut engine = engine_with(&fake);

        engine.process_message(Message::SetPendingText("held".to_string()));
        engine.process_message(Message::SubmitText);

        tokio::time::sleep(Duration::from_millis(20)).await;
        engine.drain_pending_messages();
        assert!(engine.state.control.is_sending);
        assert!(!engine.state.control.can_send());

        // A second submit while in flight is ignored
        engine.process_message(Message::SubmitText);
        assert_eq!(fake.call_count(), 1);

        fake.release();
        settle(&mut engine).await;
        assert!(!engine.state.control.is_sending);
    }

    #[tokio::test]
    async fn test_events_for_successful_toggle() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);
        let mut events = engine.subscribe();

        engine.process_message(Message::FlipToggle);
        settle(&mut engine).await;

        let request = RequestKind::Toggle {
            state: ToggleState::On,
        };
        assert_eq!(
            events.try_recv().unwrap(),
            EngineEvent::RequestStarted {
                request: request.clone()
            }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            EngineEvent::RequestSucceeded { request }
        );
        assert_eq!(
            events.try_recv().unwrap(),
            EngineEvent::ConnectionChanged {
                old: ConnectionStatus::Disconnected,
                new: ConnectionStatus::Connected,
            }
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_no_connection_event_when_unchanged() {
        let fake = FakeDeviceClient::unreachable();
        let mut engine = engine_with(&fake);
        let mut events = engine.subscribe();

        engine.process_message(Message::FlipToggle);
        settle(&mut engine).await;

        let kinds: Vec<_> = std::iter::from_fn(|| events.try_recv().ok())
            .map(|e| e.event_type())
            .collect();
        assert_eq!(kinds, vec!["request_started", "request_failed"]);
    }

    #[tokio::test]
    async fn test_quit_message() {
        let fake = FakeDeviceClient::ok();
        let mut engine = engine_with(&fake);
        assert!(!engine.should_quit());

        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }
}
