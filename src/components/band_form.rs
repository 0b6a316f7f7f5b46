//! Band name input and action button.

use leptos::prelude::*;

use crate::state::form::BandForm;

/// Text input plus the create/rename action button.
///
/// The input mirrors the form draft; Enter and the button both submit. The
/// button is restyled and relabeled while an edit session is active.
#[component]
pub fn BandNameForm(form: RwSignal<BandForm>, on_submit: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="band-form">
            <input
                class="band-form__input"
                type="text"
                placeholder="New Band"
                prop:value=move || form.get().draft
                on:input=move |ev| form.update(|f| f.set_draft(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button
                class="btn band-form__action"
                class:band-form__action--editing=move || form.get().is_editing()
                on:click=move |_| on_submit.run(())
            >
                {move || if form.get().is_editing() { "Save" } else { "Add" }}
            </button>
        </div>
    }
}
