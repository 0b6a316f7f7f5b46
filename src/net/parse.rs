//! Parsing helpers for channel payload handling.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Band, ChannelMessage};

/// Parse one raw websocket text message into an envelope.
///
/// Returns `None` for anything that is not a well-formed envelope; the caller
/// drops such messages without touching state.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_channel_message(text: &str) -> Option<ChannelMessage> {
    serde_json::from_str::<ChannelMessage>(text).ok()
}

/// Parse a `current-bands` payload into an ordered band list.
///
/// The payload is parsed wholesale: a snapshot either deserializes completely
/// in delivered order or is rejected as a unit. Individual rows are never
/// filtered out, so a held collection always equals exactly one peer snapshot.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_bands(data: &serde_json::Value) -> Option<Vec<Band>> {
    serde_json::from_value::<Vec<Band>>(data.clone()).ok()
}
