// File: crates/contactbook_contact/src/doc.rs

use utoipa::OpenApi;

use crate::logic::ContactReceipt;
use contactbook_common::{BookingFields, BookingOutcome, ContactForm};

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::submit_contact_handler),
    components(schemas(ContactForm, BookingFields, BookingOutcome, ContactReceipt)),
    tags(
        (name = "Contact", description = "Contact form with optional appointment booking")
    )
)]
pub struct ContactApiDoc;
