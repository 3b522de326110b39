use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use crate::state::AppState;

/// GET /api/v1/events
/// Streams store changes so other views know to reload. A `resync` event
/// means notifications were dropped and the view should reload everything.
pub async fn events_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.store.subscribe();
    let events = stream::unfold(rx, |mut rx| async move {
        let event = match rx.recv().await {
            Ok(change) => match Event::default().event("store").json_data(&change) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Failed to encode store event: {e}");
                    Event::default().event("resync")
                }
            },
            Err(RecvError::Lagged(missed)) => {
                warn!("Event subscriber lagged by {missed} notifications");
                Event::default().event("resync").data(missed.to_string())
            }
            Err(RecvError::Closed) => return None,
        };
        Some((Ok(event), rx))
    });
    Sse::new(events).keep_alive(KeepAlive::default())
}
