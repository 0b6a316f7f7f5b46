//! Websocket channel client for real-time communication with the peer.
//!
//! The channel client owns the websocket lifecycle: connection, reconnection
//! with exponential backoff, connectivity status updates, and dispatch of
//! inbound events through the subscription registry. It is the only writer of
//! [`ConnectionStatus`](crate::state::bands::ConnectionStatus).
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Connect/send/receive failures never surface per-action: they collapse into
//! the connectivity status plus a console log line, and the reconnect loop
//! recovers on its own. A (re)connect emits nothing; if the peer resends a
//! snapshot after reconnecting, that arrives as an ordinary inbound event.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

#[cfg(any(test, feature = "hydrate"))]
use std::cell::RefCell;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::parse::{parse_bands, parse_channel_message};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::registry::EventRegistry;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::bands::BandsState;
#[cfg(feature = "hydrate")]
use crate::state::bands::ConnectionStatus;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(any(test, feature = "hydrate"))]
thread_local! {
    static REGISTRY: RefCell<EventRegistry> = RefCell::new(EventRegistry::new());
}

/// Register `handler` for a named inbound event.
///
/// At most one handler exists per event name: a later registration replaces
/// the earlier one, so a remounted screen can never double-subscribe.
#[cfg(any(test, feature = "hydrate"))]
pub fn on<F>(event: &str, handler: F)
where
    F: FnMut(&serde_json::Value) + 'static,
{
    REGISTRY.with(|registry| registry.borrow_mut().on(event, handler));
}

/// Deregister the handler for a named inbound event. Idempotent.
#[cfg(any(test, feature = "hydrate"))]
pub fn off(event: &str) {
    REGISTRY.with(|registry| registry.borrow_mut().off(event));
}

/// Route one raw inbound text message to its subscribed handler.
///
/// Unparseable text and events without a subscriber are dropped. The registry
/// borrow is released before the handler runs, so handlers may `on`/`off`.
#[cfg(any(test, feature = "hydrate"))]
fn dispatch_text(text: &str) {
    let Some(message) = parse_channel_message(text) else {
        leptos::logging::warn!("channel: dropping unparseable message");
        return;
    };

    let handler = REGISTRY.with(|registry| registry.borrow().handler(&message.event));
    if let Some(handler) = handler {
        handler.borrow_mut()(&message.data);
    }
}

/// Apply a `current-bands` payload: the whole collection is replaced with the
/// delivered snapshot. A malformed payload is logged and dropped, leaving the
/// held collection untouched.
#[cfg(any(test, feature = "hydrate"))]
pub fn apply_current_bands(state: &mut BandsState, data: &serde_json::Value) {
    let Some(bands) = parse_bands(data) else {
        leptos::logging::warn!("channel: dropping malformed current-bands payload");
        return;
    };
    state.apply_snapshot(bands);
}

/// Spawn the websocket channel lifecycle as a local async task.
///
/// Returns the sender side of the outbound queue; wrap it in a
/// [`ChannelSender`](crate::app::ChannelSender) for emit call sites.
#[cfg(feature = "hydrate")]
pub fn spawn_channel_client(bands: RwSignal<BandsState>) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(channel_client_loop(bands, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn channel_client_loop(
    bands: RwSignal<BandsState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        bands.update(|state| state.connection_status = ConnectionStatus::Connecting);

        let ws_url = endpoint_url();
        match connect_and_run(&ws_url, bands, &rx).await {
            Ok(()) => {
                leptos::logging::log!("channel disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("channel error: {e}");
            }
        }

        bands.update(|state| state.connection_status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Derive the websocket endpoint from the current page location.
#[cfg(feature = "hydrate")]
fn endpoint_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:8082".to_owned());
    format!("{ws_proto}://{host}/ws")
}

/// Connect to the websocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    bands: RwSignal<BandsState>,
    rx: &std::rc::Rc<RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    bands.update(|state| state.connection_status = ConnectionStatus::Connected);

    // Forward outgoing messages from the shared queue to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: dispatch inbound events to subscribers.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => dispatch_text(&text),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
