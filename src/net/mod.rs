//! Networking modules for the websocket event channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `channel` manages the websocket lifecycle, `registry` holds the named-event
//! subscription table it dispatches through, `types` defines the wire schema,
//! and `parse` turns raw payloads into DTOs.

pub mod channel;
pub mod parse;
pub mod registry;
pub mod types;
