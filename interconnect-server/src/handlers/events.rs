use std::{convert::Infallible, pin::Pin, time::Duration};

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, KeepAliveStream, Sse},
};
use interconnect_core::{ResourceEvent, Watch};
use interconnect_model::Resource;
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use tracing::warn;

use crate::infra::app_state::AppState;

type EventStream = Pin<Box<dyn Stream<Item = Result<Event, Infallible>> + Send>>;

#[derive(Debug, Default, Deserialize)]
pub struct EventStreamQuery {
    /// End the stream after the snapshot instead of following mutations.
    #[serde(default)]
    pub snapshot_only: bool,
}

/// Streams every stored resource as a `snapshot` event, then a
/// `snapshot_complete` marker carrying the snapshot sequence, then one
/// `upserted`/`deleted` event per committed mutation.
pub async fn resource_events_sse_handler(
    State(state): State<AppState>,
    Query(query): Query<EventStreamQuery>,
) -> Sse<KeepAliveStream<EventStream>> {
    let Watch {
        snapshot,
        sequence,
        events,
    } = state.engine().watch();

    let mut head: Vec<Result<Event, Infallible>> = snapshot
        .iter()
        .filter_map(snapshot_to_sse)
        .map(Ok)
        .collect();
    head.push(Ok(Event::default()
        .event("snapshot_complete")
        .id(sequence.to_string())
        .data(sequence.to_string())));
    let head = tokio_stream::iter(head);

    let stream: EventStream = if query.snapshot_only {
        Box::pin(head)
    } else {
        let live = BroadcastStream::new(events).filter_map(|item| match item {
            Ok(event) => resource_event_to_sse(&event).map(Ok),
            Err(err) => {
                warn!("resource event broadcast error: {err}");
                None
            }
        });
        Box::pin(head.chain(live))
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

fn snapshot_to_sse(resource: &Resource) -> Option<Event> {
    match Event::default().event("snapshot").json_data(resource) {
        Ok(event) => Some(event),
        Err(err) => {
            warn!(resource = %resource.name(), "failed to encode snapshot event: {err}");
            None
        }
    }
}

fn resource_event_to_sse(event: &ResourceEvent) -> Option<Event> {
    match Event::default()
        .event(event.event_type())
        .id(event.sequence.to_string())
        .json_data(event)
    {
        Ok(sse) => Some(sse),
        Err(err) => {
            warn!(sequence = event.sequence, "failed to encode resource event: {err}");
            None
        }
    }
}
