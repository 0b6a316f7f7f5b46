//! Connection-status line under the screen title.

use leptos::prelude::*;

use crate::state::bands::BandsState;

/// Shows `Status: Online` or `Status: Offline` from the connectivity flag.
///
/// The flag mirrors transport connect/disconnect only; it is not a promise
/// that any emitted event was delivered.
#[component]
pub fn StatusLine() -> impl IntoView {
    let bands = expect_context::<RwSignal<BandsState>>();

    let status_class = move || {
        if bands.get().is_online() {
            "status-line__state status-line__state--online"
        } else {
            "status-line__state status-line__state--offline"
        }
    };

    let status_label = move || if bands.get().is_online() { "Online" } else { "Offline" };

    view! {
        <p class="status-line">
            "Status: "
            <span class=status_class>{status_label}</span>
        </p>
    }
}
