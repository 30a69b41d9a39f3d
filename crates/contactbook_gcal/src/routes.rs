// --- File: crates/contactbook_gcal/src/routes.rs ---

use crate::handlers::{book_form_handler, book_json_handler, GcalState};
use axum::{routing::post, Router};
use std::sync::Arc;

/// Creates a router containing all routes for the Google Calendar feature.
pub fn routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/book", post(book_form_handler))
        .route("/gcal/book", post(book_json_handler))
        .with_state(state)
}
