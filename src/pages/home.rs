//! Home screen: the band list with voting, renaming, and creation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It subscribes to `current-bands` pushes for its
//! own lifetime and translates user gestures into outbound events. It never
//! mutates the band collection locally: an action becomes visible only when
//! the peer broadcasts a snapshot that includes it.

use leptos::prelude::*;

use crate::app::ChannelSender;
use crate::components::band_form::BandNameForm;
use crate::components::band_list::BandList;
use crate::components::status_line::StatusLine;
use crate::state::form::BandForm;
use crate::util::band_emit::{send_band_action, send_delete_band, send_vote_band};

/// The BandNames screen.
#[component]
pub fn HomeScreen() -> impl IntoView {
    let sender = expect_context::<RwSignal<ChannelSender>>();

    // The edit session lives for exactly one screen lifetime.
    let form = RwSignal::new(BandForm::default());

    // Subscribe to snapshot pushes while this screen is displayed. The
    // registry holds one handler per event name, and `on_cleanup` tears the
    // subscription down, so repeated mount/unmount cycles can never leak a
    // handler or double-apply a snapshot.
    #[cfg(feature = "hydrate")]
    {
        let bands = expect_context::<RwSignal<crate::state::bands::BandsState>>();
        crate::net::channel::on("current-bands", move |data| {
            bands.update(|state| crate::net::channel::apply_current_bands(state, data));
        });
        on_cleanup(|| crate::net::channel::off("current-bands"));
    }

    let on_submit = Callback::new(move |()| {
        let mut action = None;
        form.update(|f| action = f.submit());
        if let Some(action) = action {
            // Best-effort emit; the form has already reset either way.
            send_band_action(sender, &action);
        }
    });

    let on_tap = Callback::new(move |(id, name): (String, String)| {
        form.update(|f| f.tap_row(&id, &name));
    });

    let on_vote = Callback::new(move |id: String| send_vote_band(sender, &id));
    let on_delete = Callback::new(move |id: String| send_delete_band(sender, &id));

    view! {
        <div class="home-screen">
            <h1 class="home-screen__title">"BandNames"</h1>
            <StatusLine/>
            <BandNameForm form=form on_submit=on_submit/>
            <BandList on_tap=on_tap on_vote=on_vote on_delete=on_delete/>
        </div>
    }
}
