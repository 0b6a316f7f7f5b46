//! Wire-protocol DTOs for the event channel.
//!
//! DESIGN
//! ======
//! These types intentionally mirror peer payloads so serde round-trips stay
//! lossless and channel dispatch code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A band as represented in the wire protocol.
///
/// Bands are owned exclusively by the remote peer: the client never computes
/// `votes` or mints an `id`, it only references ids it previously received
/// inside a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Opaque stable identifier assigned by the peer.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current vote count.
    pub votes: u32,
}

/// Envelope for one message on the event channel, in either direction.
///
/// `data` is kept open-ended because payload shapes vary per event: snapshot
/// events carry an array of bands, vote/delete events carry a bare id string,
/// create/rename events carry small objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelMessage {
    /// Event name, e.g. `"current-bands"` or `"vote-band"`.
    pub event: String,
    /// Arbitrary JSON payload.
    pub data: serde_json::Value,
}
