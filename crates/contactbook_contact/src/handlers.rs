// --- File: crates/contactbook_contact/src/handlers.rs ---
use crate::logic::{submit_contact_form, ContactReceipt};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use contactbook_common::{ContactForm, ContactbookError};
use contactbook_gcal::GcalState;
use std::sync::Arc;

// State for contact handlers
#[derive(Clone)]
pub struct ContactState {
    /// `None` when calendar booking is disabled.
    pub gcal: Option<Arc<GcalState>>,
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/contact", // Relative to /api
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message received, with the booking outcome when one was requested", body = ContactReceipt),
        (status = 400, description = "Form failed its checks; `fields` lists the messages per field")
    ),
    tag = "Contact"
))]
pub async fn submit_contact_handler(
    State(state): State<Arc<ContactState>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactReceipt>, ContactbookError> {
    let Json(form) = payload.map_err(|e| ContactbookError::ParseError(e.body_text()))?;

    let receipt = submit_contact_form(state.gcal.as_deref(), form).await?;
    Ok(Json(receipt))
}
