// File: crates/contactbook_gcal/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use contactbook_common::{BookingFields, BookingOutcome};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::book_form_handler,
        crate::handlers::book_json_handler
    ),
    components(
        schemas(
            BookingFields,
            BookingOutcome
        )
    ),
    tags(
        (name = "GCal", description = "Google Calendar Booking API")
    ),
    servers(
        (url = "/api", description = "Google Calendar API server")
    )
)]
pub struct GcalApiDoc;
