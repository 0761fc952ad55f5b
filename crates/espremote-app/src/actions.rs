//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each request runs in its own task and reports back with a `Message`.
//! Nothing is cancelled or sequenced: overlapping requests resolve in
//! whatever order the device answers them.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use espremote_core::ToggleState;
use espremote_device::DeviceClient;

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// The request itself runs in a nested task. If it panics, the outer task
/// still reports a failure so the engine never waits on a lost outcome.
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: DeviceClient + Sync + 'static,
{
    match action {
        UpdateAction::SendToggle { state } => {
            tokio::spawn(async move {
                let request =
                    tokio::spawn(async move { execute_toggle(client.as_ref(), state).await });
                let msg = request.await.unwrap_or_else(|e| {
                    warn!("Toggle {} task ended without an outcome: {}", state, e);
                    Message::ToggleFailed {
                        state,
                        error: format!("request task failed: {e}"),
                    }
                });
                report(&msg_tx, msg).await;
            });
        }

        UpdateAction::SendText { text } => {
            tokio::spawn(async move {
                let sent = text.clone();
                let request =
                    tokio::spawn(async move { execute_send_text(client.as_ref(), sent).await });
                let msg = request.await.unwrap_or_else(|e| {
                    warn!("Text task ended without an outcome: {}", e);
                    Message::TextSendFailed {
                        text,
                        error: format!("request task failed: {e}"),
                    }
                });
                report(&msg_tx, msg).await;
            });
        }
    }
}

/// Hand an outcome back to the engine
async fn report(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        debug!("Engine gone, dropping request outcome: {:?}", e.0);
    }
}

/// Issue the toggle request and describe its outcome
async fn execute_toggle<C: DeviceClient>(client: &C, state: ToggleState) -> Message {
    match client.send_toggle(state).await {
        Ok(()) => {
            info!("Toggle {} acknowledged by device", state);
            Message::ToggleCompleted { state }
        }
        Err(e) => {
            warn!("Toggle {} failed: {}", state, e);
            Message::ToggleFailed {
                state,
                error: e.to_string(),
            }
        }
    }
}

/// Issue the text request and describe its outcome
async fn execute_send_text<C: DeviceClient>(client: &C, text: String) -> Message {
    match client.send_text(&text).await {
        Ok(()) => {
            info!("Text ({} chars) accepted by device", text.chars().count());
            Message::TextSent { text }
        }
        Err(e) => {
            warn!("Sending text failed: {}", e);
            Message::TextSendFailed {
                text,
                error: e.to_string(),
            }
        }
    }
}
