//! Band list rows with vote and delete actions.

use leptos::prelude::*;

use crate::state::bands::BandsState;

/// Renders the held snapshot in delivered order, one row per band.
///
/// Tapping a row toggles the edit session; the per-row buttons emit upvote
/// and delete intents. Row actions stop propagation so a button press does
/// not double as a row tap.
#[component]
pub fn BandList(
    on_tap: Callback<(String, String)>,
    on_vote: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let bands = expect_context::<RwSignal<BandsState>>();

    view! {
        <ul class="band-list">
            {move || {
                bands
                    .get()
                    .bands
                    .into_iter()
                    .map(|band| {
                        let tap = (band.id.clone(), band.name.clone());
                        let vote_id = band.id.clone();
                        let delete_id = band.id.clone();
                        view! {
                            <li class="band-list__row" on:click=move |_| on_tap.run(tap.clone())>
                                <span class="band-list__label">
                                    {format!("{} - {}", band.votes, band.name)}
                                </span>
                                <span class="band-list__actions">
                                    <button
                                        class="btn band-list__vote"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            on_vote.run(vote_id.clone());
                                        }
                                    >
                                        "+1"
                                    </button>
                                    <button
                                        class="btn btn--danger band-list__delete"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            on_delete.run(delete_id.clone());
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
