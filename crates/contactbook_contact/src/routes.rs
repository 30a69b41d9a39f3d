// --- File: crates/contactbook_contact/src/routes.rs ---
use crate::handlers::{submit_contact_handler, ContactState};
use axum::{routing::post, Router};
use contactbook_gcal::GcalState;
use std::sync::Arc;

pub fn routes(gcal: Option<Arc<GcalState>>) -> Router {
    let contact_state = Arc::new(ContactState { gcal });

    Router::new()
        .route("/contact", post(submit_contact_handler))
        .with_state(contact_state)
}
