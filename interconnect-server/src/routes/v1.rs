use axum::{Router, routing::get};

use crate::{
    AppState,
    handlers::{
        attachment_circuits::{
            create_attachment_circuit_handler, delete_attachment_circuit_handler,
            get_attachment_circuit_handler, list_attachment_circuits_handler,
        },
        bearers::{
            create_bearer_handler, delete_bearer_handler, get_bearer_handler,
            list_bearers_handler,
        },
        contact_windows::list_contact_windows_handler,
        events::resource_events_sse_handler,
        targets::{get_target_handler, list_targets_handler},
        transceivers::{
            create_transceiver_handler, delete_transceiver_handler, get_transceiver_handler,
            list_compatible_transceiver_types_handler, list_transceivers_handler,
            update_transceiver_handler,
        },
    },
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        // Transceivers
        .route(
            "/transceivers",
            get(list_transceivers_handler).post(create_transceiver_handler),
        )
        .route(
            "/transceivers/{id}",
            get(get_transceiver_handler)
                .put(update_transceiver_handler)
                .delete(delete_transceiver_handler),
        )
        .route(
            "/compatible-transceiver-types",
            get(list_compatible_transceiver_types_handler),
        )
        // Read-only catalog and derived windows
        .route("/targets", get(list_targets_handler))
        .route("/targets/{id}", get(get_target_handler))
        .route("/contact-windows", get(list_contact_windows_handler))
        // Bearers
        .route(
            "/bearers",
            get(list_bearers_handler).post(create_bearer_handler),
        )
        .route(
            "/bearers/{id}",
            get(get_bearer_handler).delete(delete_bearer_handler),
        )
        // Attachment circuits
        .route(
            "/attachment-circuits",
            get(list_attachment_circuits_handler).post(create_attachment_circuit_handler),
        )
        .route(
            "/attachment-circuits/{id}",
            get(get_attachment_circuit_handler).delete(delete_attachment_circuit_handler),
        )
        // Change feed
        .route("/events", get(resource_events_sse_handler))
}
