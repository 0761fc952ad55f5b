//! espremote-app - Application state and orchestration for ESP Remote
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine abstraction shared by the TUI and one-shot
//! runners, settings loading and request dispatch.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::{EngineEvent, RequestKind};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ControlState, Focus};
