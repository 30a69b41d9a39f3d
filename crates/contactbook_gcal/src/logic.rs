// --- File: crates/contactbook_gcal/src/logic.rs ---
use crate::service::GcalServiceError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use contactbook_common::models::{violated_rules, BookingFields, BookingOutcome};
use contactbook_common::services::{CalendarEvent, CalendarService};
use contactbook_config::GcalConfig;
use std::collections::HashMap;
use tracing::{error, info};
use validator::Validate;

/// Every appointment lasts exactly one hour.
pub const APPOINTMENT_LENGTH_SECS: i64 = 3600;

/// Zone tag sent with both instants.
pub const EVENT_TIME_ZONE: &str = "UTC";

// --- Error Handling ---
use thiserror::Error;

/// Coarse failure category, used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingErrorKind {
    Validation,
    Authentication,
    Provider,
    Network,
}

impl std::fmt::Display for BookingErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookingErrorKind::Validation => "validation",
            BookingErrorKind::Authentication => "authentication",
            BookingErrorKind::Provider => "provider",
            BookingErrorKind::Network => "network",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid booking fields: {0}")]
    InvalidFields(String),
    #[error("Invalid appointment window: {0}")]
    InvalidWindow(String),
    #[error("Calendar authentication failed: {0}")]
    Authentication(String),
    #[error("Calendar provider error: {0}")]
    Provider(String),
    #[error("Calendar unreachable: {0}")]
    Network(String),
}

impl BookingError {
    pub fn kind(&self) -> BookingErrorKind {
        match self {
            BookingError::InvalidFields(_) | BookingError::InvalidWindow(_) => {
                BookingErrorKind::Validation
            }
            BookingError::Authentication(_) => BookingErrorKind::Authentication,
            BookingError::Provider(_) => BookingErrorKind::Provider,
            BookingError::Network(_) => BookingErrorKind::Network,
        }
    }
}

impl From<GcalServiceError> for BookingError {
    fn from(err: GcalServiceError) -> Self {
        let detail = err.to_string();
        match err {
            GcalServiceError::MissingCredentials(_) | GcalServiceError::Authentication(_) => {
                BookingError::Authentication(detail)
            }
            GcalServiceError::ApiError(api_error) => match api_error {
                google_calendar3::Error::MissingToken(_)
                | google_calendar3::Error::MissingAPIKey => BookingError::Authentication(detail),
                google_calendar3::Error::HttpError(_) | google_calendar3::Error::Io(_) => {
                    BookingError::Network(detail)
                }
                _ => BookingError::Provider(detail),
            },
            GcalServiceError::Rejected(_) => BookingError::Provider(detail),
        }
    }
}

// --- Data Structures ---

/// One-hour UTC interval of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AppointmentWindow {
    /// Reads `date` (`YYYY-MM-DD`) and `time` (`HH:MM` or `HH:MM:SS`) as UTC.
    ///
    /// Every field must be zero padded and seconds stop at 59.
    pub fn parse(date: &str, time: &str) -> Result<Self, BookingError> {
        if !has_shape(date, "dddd-dd-dd") {
            return Err(BookingError::InvalidWindow(format!(
                "eventDate '{date}' is not YYYY-MM-DD"
            )));
        }
        let time_format = if has_shape(time, "dd:dd") {
            "%H:%M"
        } else if has_shape(time, "dd:dd:dd") {
            "%H:%M:%S"
        } else {
            return Err(BookingError::InvalidWindow(format!(
                "eventTime '{time}' is not HH:MM or HH:MM:SS"
            )));
        };

        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| BookingError::InvalidWindow(format!("eventDate '{date}': {e}")))?;
        let time_of_day = NaiveTime::parse_from_str(time, time_format)
            .map_err(|e| BookingError::InvalidWindow(format!("eventTime '{time}': {e}")))?;
        // chrono reads second 60 as a leap second
        if time_of_day.nanosecond() >= 1_000_000_000 {
            return Err(BookingError::InvalidWindow(format!(
                "eventTime '{time}': second out of range"
            )));
        }

        let start = Utc.from_utc_datetime(&day.and_time(time_of_day));
        Self::starting_at(start)
    }

    pub fn starting_at(start: DateTime<Utc>) -> Result<Self, BookingError> {
        let end = start
            .checked_add_signed(Duration::seconds(APPOINTMENT_LENGTH_SECS))
            .ok_or_else(|| BookingError::InvalidWindow(format!("{start} is out of range")))?;
        Ok(Self { start, end })
    }
}

/// `pattern` uses `d` for an ASCII digit; any other byte must match exactly.
fn has_shape(value: &str, pattern: &str) -> bool {
    value.len() == pattern.len()
        && value
            .bytes()
            .zip(pattern.bytes())
            .all(|(v, p)| if p == b'd' { v.is_ascii_digit() } else { v == p })
}

/// Where and how long to wait when booking.
#[derive(Debug, Clone)]
pub struct BookingSettings {
    pub calendar_id: String,
    pub timeout: std::time::Duration,
}

impl BookingSettings {
    pub fn from_config(config: &GcalConfig) -> Self {
        Self {
            calendar_id: config.calendar_id().to_string(),
            timeout: config.request_timeout(),
        }
    }
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self::from_config(&GcalConfig::default())
    }
}

/// A successfully created appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedAppointment {
    pub event_id: String,
    /// Status reported by the calendar, usually `confirmed`.
    pub status: String,
    pub window: AppointmentWindow,
}

// --- Booking Logic ---

/// The event submitted for validated `fields` in `window`.
pub fn build_calendar_event(fields: &BookingFields, window: &AppointmentWindow) -> CalendarEvent {
    CalendarEvent {
        summary: fields.subject.clone(),
        description: Some(fields.event_description()),
        start_time: window.start,
        end_time: window.end,
        time_zone: EVENT_TIME_ZONE.to_string(),
        attendees: vec![fields.email.clone()],
        notify_attendees: true,
    }
}

/// Validates the flat request, derives the window and creates the event.
///
/// Makes at most one call to `service`, and none when validation fails.
pub async fn try_book_appointment<S>(
    service: &S,
    settings: &BookingSettings,
    form_data: &HashMap<String, String>,
) -> Result<BookedAppointment, BookingError>
where
    S: CalendarService + ?Sized,
    BookingError: From<S::Error>,
{
    let fields = BookingFields::from_form_data(form_data);
    fields
        .validate()
        .map_err(|e| BookingError::InvalidFields(violated_rules(&e)))?;

    let window = AppointmentWindow::parse(&fields.event_date, &fields.event_time)?;
    let event = build_calendar_event(&fields, &window);

    let created = tokio::time::timeout(
        settings.timeout,
        service.create_event(&settings.calendar_id, event),
    )
    .await
    .map_err(|_| {
        BookingError::Network(format!(
            "no response from calendar within {:?}",
            settings.timeout
        ))
    })??;

    match created.event_id {
        Some(event_id) if !event_id.is_empty() => Ok(BookedAppointment {
            event_id,
            status: created.status,
            window,
        }),
        _ => Err(BookingError::Provider(
            "created event has no id".to_string(),
        )),
    }
}

/// Books an appointment and reports the result as a [`BookingOutcome`].
///
/// Never fails. The cause of a failure is logged once and the caller only
/// sees the generic failure message.
pub async fn book_appointment<S>(
    service: &S,
    settings: &BookingSettings,
    form_data: &HashMap<String, String>,
) -> BookingOutcome
where
    S: CalendarService + ?Sized,
    BookingError: From<S::Error>,
{
    match try_book_appointment(service, settings, form_data).await {
        Ok(booked) => {
            info!(
                "Booked appointment {} ({}) from {} to {}",
                booked.event_id, booked.status, booked.window.start, booked.window.end
            );
            BookingOutcome::booked(booked.event_id)
        }
        Err(e) => {
            error!(kind = %e.kind(), "Error booking appointment: {}", e);
            BookingOutcome::failed()
        }
    }
}
