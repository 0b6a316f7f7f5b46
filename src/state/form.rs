//! Edit-session state machine for the band name form.
//!
//! DESIGN
//! ======
//! The form is a strict two-state toggle: `Idle` (submit creates a band) or
//! `Editing` (submit renames the selected band). Tapping a row while *any*
//! edit is active cancels the session, regardless of which row was tapped;
//! the switch is keyed off "is an edit active", not off the tapped id.
//!
//! The session never reads the band collection. If the band under an active
//! edit is deleted remotely, the session keeps referencing the vanished id
//! until the next tap or submit resets it through the normal paths.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Which band, if any, the form is currently renaming.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No row selected; submit creates a new band.
    #[default]
    Idle,
    /// One row selected; submit renames it.
    Editing {
        /// Id of the band selected when editing began. May go stale if the
        /// peer deletes the band mid-session.
        band_id: String,
    },
}

/// Local-only form state: the in-progress draft text and the edit session.
#[derive(Clone, Debug, Default)]
pub struct BandForm {
    pub draft: String,
    pub session: EditSession,
}

/// Outbound intent produced by a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BandAction {
    /// Ask the peer to append a new band with zero votes.
    Create { name: String },
    /// Ask the peer to rename an existing band.
    Rename { id: String, new_name: String },
}

impl BandForm {
    pub fn is_editing(&self) -> bool {
        matches!(self.session, EditSession::Editing { .. })
    }

    /// Mirror the text input into the draft.
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Handle a tap on a band row.
    ///
    /// While `Idle`, the tap selects the row for renaming and seeds the draft
    /// with its current name. While `Editing`, even if a different row was
    /// tapped, the tap cancels the session and clears the draft.
    pub fn tap_row(&mut self, id: &str, current_name: &str) {
        if self.is_editing() {
            self.session = EditSession::Idle;
            self.draft.clear();
        } else {
            self.session = EditSession::Editing { band_id: id.to_owned() };
            self.draft = current_name.to_owned();
        }
    }

    /// Handle the action button / Enter key.
    ///
    /// Whitespace-only drafts are rejected without emitting anything or
    /// touching the session. Otherwise the trimmed draft becomes a
    /// [`BandAction`] and the form resets unconditionally, before any peer
    /// confirmation, so a rejected action still clears the form.
    pub fn submit(&mut self) -> Option<BandAction> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }

        let action = match std::mem::take(&mut self.session) {
            EditSession::Editing { band_id } => BandAction::Rename {
                id: band_id,
                new_name: text.to_owned(),
            },
            EditSession::Idle => BandAction::Create { name: text.to_owned() },
        };

        self.draft.clear();
        Some(action)
    }
}
