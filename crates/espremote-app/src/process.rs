//! Message processing
//!
//! Runs a message through the TEA update loop and dispatches any resulting
//! actions to the device client.

use std::sync::Arc;

use tokio::sync::mpsc;

use espremote_device::DeviceClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::UpdateAction;

/// Process a message through the TEA update function.
///
/// Returns the actions that were dispatched, in order.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) -> Vec<UpdateAction>
where
    C: DeviceClient + Sync + 'static,
{
    let mut dispatched = Vec::new();

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            dispatched.push(action.clone());
            handle_action(action, msg_tx.clone(), client.clone());
        }

        msg = result.message;
    }

    dispatched
}
