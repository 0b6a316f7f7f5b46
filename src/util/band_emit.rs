//! Shared outbound event builders and send helpers.
//!
//! Every user intent becomes one named channel event. The payload shapes are
//! fixed by the peer: vote and delete carry the bare band id, create and
//! rename carry small objects. Builders are kept separate from the send
//! wrappers so payload shapes stay testable without a live channel.

#[cfg(test)]
#[path = "band_emit_test.rs"]
mod band_emit_test;

use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::ChannelSender;
use crate::net::types::ChannelMessage;
use crate::state::form::BandAction;

/// Build a `vote-band` event carrying the bare band id.
fn vote_band_message(id: &str) -> ChannelMessage {
    ChannelMessage {
        event: "vote-band".to_owned(),
        data: serde_json::json!(id),
    }
}

/// Build a `delete-band` event carrying the bare band id.
fn delete_band_message(id: &str) -> ChannelMessage {
    ChannelMessage {
        event: "delete-band".to_owned(),
        data: serde_json::json!(id),
    }
}

/// Build a `create-band` event. The peer appends the band with zero votes.
fn create_band_message(name: &str) -> ChannelMessage {
    ChannelMessage {
        event: "create-band".to_owned(),
        data: serde_json::json!({ "name": name }),
    }
}

/// Build a `change-band-name` event for an existing band.
fn change_band_name_message(id: &str, new_name: &str) -> ChannelMessage {
    ChannelMessage {
        event: "change-band-name".to_owned(),
        data: serde_json::json!({ "id": id, "newName": new_name }),
    }
}

/// Emit an upvote for one band.
///
/// No optimistic update: the visible count changes only when the peer pushes
/// a fresh snapshot.
pub fn send_vote_band(sender: RwSignal<ChannelSender>, id: &str) {
    let _ = sender.get_untracked().send(&vote_band_message(id));
}

/// Emit a delete for one band. Same no-optimistic-update rule as voting.
pub fn send_delete_band(sender: RwSignal<ChannelSender>, id: &str) {
    let _ = sender.get_untracked().send(&delete_band_message(id));
}

/// Build the event for a submitted form action.
fn band_action_message(action: &BandAction) -> ChannelMessage {
    match action {
        BandAction::Create { name } => create_band_message(name),
        BandAction::Rename { id, new_name } => change_band_name_message(id, new_name),
    }
}

/// Emit the event for a submitted form action.
pub fn send_band_action(sender: RwSignal<ChannelSender>, action: &BandAction) {
    let _ = sender.get_untracked().send(&band_action_message(action));
}
