//! Peer-mirrored band collection and channel connectivity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the local projection of the peer's authoritative band list.
//! The client never edits it in place: every inbound snapshot replaces the
//! whole collection, and user actions only become visible once the peer
//! broadcasts a fresh snapshot that includes them.

#[cfg(test)]
#[path = "bands_test.rs"]
mod bands_test;

use crate::net::types::Band;

/// Band-list state: the latest peer snapshot plus connection status.
#[derive(Clone, Debug, Default)]
pub struct BandsState {
    /// Most recently received snapshot, in delivered order. Empty until the
    /// first push arrives.
    pub bands: Vec<Band>,
    /// Current websocket connection lifecycle state.
    pub connection_status: ConnectionStatus,
}

impl BandsState {
    /// Replace the held collection with a freshly delivered snapshot.
    ///
    /// Last writer wins at whole-collection granularity: no reorder, no
    /// dedupe, no merging of the prior snapshot.
    pub fn apply_snapshot(&mut self, bands: Vec<Band>) {
        self.bands = bands;
    }

    /// The connectivity boolean shown to the user: `true` only while the
    /// socket is open. Says nothing about delivery of any given message.
    pub fn is_online(&self) -> bool {
        self.connection_status == ConnectionStatus::Connected
    }
}

/// Websocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// Websocket handshake is in progress.
    Connecting,
    /// Websocket is open.
    Connected,
}
