//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by ownership: `bands` is written only by the channel client
//! (peer-owned data plus connectivity), while `form` is written only by local
//! gesture handlers (the edit session). Rendering code reads both and mutates
//! neither directly.

pub mod bands;
pub mod form;
