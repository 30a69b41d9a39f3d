// File: crates/contactbook_gcal/src/handlers.rs
use crate::logic::{book_appointment, BookingSettings};
use crate::service::{GcalServiceError, GoogleCalendarService};
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    response::Json,
    Form,
};
use contactbook_common::services::CalendarService;
use contactbook_common::BookingOutcome;
use contactbook_config::GcalConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Calendar backend as seen by the handlers.
pub type SharedCalendar = Arc<dyn CalendarService<Error = GcalServiceError>>;

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub settings: BookingSettings,
    pub calendar: SharedCalendar,
}

impl GcalState {
    /// State backed by Google Calendar. Credentials are checked on the first booking.
    pub fn from_config(config: &GcalConfig) -> Self {
        Self {
            settings: BookingSettings::from_config(config),
            calendar: Arc::new(GoogleCalendarService::new(config.clone())),
        }
    }

    pub fn with_calendar(settings: BookingSettings, calendar: SharedCalendar) -> Self {
        Self { settings, calendar }
    }

    /// Books one appointment from a flat request.
    pub async fn book(&self, form_data: &HashMap<String, String>) -> BookingOutcome {
        book_appointment(self.calendar.as_ref(), &self.settings, form_data).await
    }
}

/// Handler to book an appointment from a url-encoded form.
///
/// Always answers 200; `success` tells whether the event was created. A body
/// that cannot be read counts as an empty form and is reported by the
/// booking log line only.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/book",
    request_body(content = contactbook_common::BookingFields, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Booking outcome", body = BookingOutcome)
    ),
    tag = "GCal"
))]
pub async fn book_form_handler(
    State(state): State<Arc<GcalState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Json<BookingOutcome> {
    let form_data = match form {
        Ok(Form(data)) => data,
        Err(rejection) => {
            debug!("Unreadable booking form: {}", rejection);
            HashMap::new()
        }
    };

    Json(state.book(&form_data).await)
}

/// Handler to book an appointment from a JSON object of strings.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/gcal/book",
    request_body = contactbook_common::BookingFields,
    responses(
        (status = 200, description = "Booking outcome", body = BookingOutcome)
    ),
    tag = "GCal"
))]
pub async fn book_json_handler(
    State(state): State<Arc<GcalState>>,
    payload: Result<Json<HashMap<String, String>>, JsonRejection>,
) -> Json<BookingOutcome> {
    let form_data = match payload {
        Ok(Json(data)) => data,
        Err(rejection) => {
            debug!("Unreadable booking request: {}", rejection);
            HashMap::new()
        }
    };

    Json(state.book(&form_data).await)
}
