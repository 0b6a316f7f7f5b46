//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the screen chrome and interaction surfaces. They read
//! shared state from Leptos context providers and raise gestures back to the
//! page through callbacks; none of them mutates the band collection directly.

pub mod band_form;
pub mod band_list;
pub mod status_line;
