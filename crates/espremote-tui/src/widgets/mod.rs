//! Widget components for the TUI

mod activity_log;
mod connection_status;
mod header;
mod last_sent;
mod message_input;
mod toggle_switch;

pub use activity_log::ActivityLog;
pub use connection_status::ConnectionIndicator;
pub use header::MainHeader;
pub use last_sent::LastSent;
pub use message_input::MessageInput;
pub use toggle_switch::ToggleSwitch;
