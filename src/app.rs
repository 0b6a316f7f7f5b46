//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::ChannelMessage;
use crate::pages::home::HomeScreen;
use crate::state::bands::BandsState;

/// Shared handle for queueing outbound channel messages.
///
/// Wraps the sender side of the queue feeding the websocket writer. Sends are
/// best-effort: there is no acknowledgement and no delivery guarantee, and a
/// send while disconnected is silently dropped.
#[derive(Clone, Default)]
pub struct ChannelSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChannelSender {
    #[cfg(feature = "hydrate")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue one message for the websocket writer.
    ///
    /// Returns `false` if no channel loop is running or the message cannot be
    /// serialized; callers treat that the same as a dropped send.
    pub fn send(&self, message: &ChannelMessage) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(tx) = &self.tx else {
                return false;
            };
            let Ok(json) = serde_json::to_string(message) else {
                return false;
            };
            tx.unbounded_send(json).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared band state and outbound sender contexts, starts the
/// channel client, and routes to the single screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bands = RwSignal::new(BandsState::default());
    provide_context(bands);

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::channel::spawn_channel_client(bands);
        provide_context(RwSignal::new(ChannelSender::new(tx)));
    }
    #[cfg(not(feature = "hydrate"))]
    provide_context(RwSignal::new(ChannelSender::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/bandnames.css"/>
        <Title text="BandNames"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeScreen/>
            </Routes>
        </Router>
    }
}
