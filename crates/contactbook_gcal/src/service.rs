// --- File: crates/contactbook_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! This module provides an implementation of the CalendarService trait for Google Calendar.

use contactbook_common::services::{
    BoxFuture, CalendarEvent, CalendarEventResult, CalendarService,
};
use contactbook_config::GcalConfig;
use google_calendar3::api::{Event, EventAttendee, EventDateTime};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::auth::{create_calendar_hub, HubType};

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Missing service account credential: {0}")]
    MissingCredentials(String),
    #[error("Service account authentication failed: {0}")]
    Authentication(String),
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Calendar rejected the event: {0}")]
    Rejected(String),
}

/// Google Calendar service implementation.
///
/// The authenticated hub is built on first use and then shared by all calls,
/// so missing credentials surface as a failed booking instead of a startup
/// error. A failed build is retried on the next call.
pub struct GoogleCalendarService {
    config: GcalConfig,
    calendar_hub: OnceCell<HubType>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(config: GcalConfig) -> Self {
        Self {
            config,
            calendar_hub: OnceCell::new(),
        }
    }

    async fn hub(&self) -> Result<&HubType, GcalServiceError> {
        self.calendar_hub
            .get_or_try_init(|| create_calendar_hub(&self.config))
            .await
    }
}

/// Converts a provider-neutral event into the Google Calendar payload.
pub fn to_google_event(event: CalendarEvent) -> Event {
    let attendees = event
        .attendees
        .into_iter()
        .map(|email| EventAttendee {
            email: Some(email),
            ..Default::default()
        })
        .collect();

    Event {
        summary: Some(event.summary),
        description: event.description,
        start: Some(EventDateTime {
            date_time: Some(event.start_time),
            time_zone: Some(event.time_zone.clone()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(event.end_time),
            time_zone: Some(event.time_zone),
            ..Default::default()
        }),
        attendees: Some(attendees),
        ..Default::default()
    }
}

/// `sendUpdates` value for `event`: `all` notifies every attendee.
pub fn send_updates(event: &CalendarEvent) -> &'static str {
    if event.notify_attendees {
        "all"
    } else {
        "none"
    }
}

/// Reads the inserted event. A missing status means `confirmed`; an event
/// that comes back `cancelled` was not booked.
pub fn created_result(created_event: Event) -> Result<CalendarEventResult, GcalServiceError> {
    let status = created_event
        .status
        .unwrap_or_else(|| "confirmed".to_string());
    if status == "cancelled" {
        return Err(GcalServiceError::Rejected(format!(
            "event {} came back cancelled",
            created_event.id.as_deref().unwrap_or("<no id>")
        )));
    }

    Ok(CalendarEventResult {
        event_id: created_event.id,
        status,
    })
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Inserts the event into `calendar_id`.
    ///
    /// `sendUpdates` is `all` when the event asks for attendee notification and
    /// `none` otherwise. The configured scope is requested for the call.
    ///
    /// # Errors
    ///
    /// * `MissingCredentials` / `Authentication` when no token can be obtained
    /// * `ApiError` when Google rejects the request or the transport fails
    /// * `Rejected` when the event comes back cancelled
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();

        Box::pin(async move {
            let calendar_hub = self.hub().await?;
            let updates = send_updates(&event);
            let new_event = to_google_event(event);

            debug!("inserting event into calendar {}", calendar_id);
            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .send_updates(updates)
                .add_scope(self.config.scope())
                .doit()
                .await?;

            created_result(created_event)
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_event() -> CalendarEvent {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap();
        CalendarEvent {
            summary: "Consultation request".to_string(),
            description: Some("From: Jane Doe (jane@example.com)\n\nHello".to_string()),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            time_zone: "UTC".to_string(),
            attendees: vec!["jane@example.com".to_string()],
            notify_attendees: true,
        }
    }

    #[test]
    fn test_to_google_event_maps_all_fields() {
        let event = to_google_event(sample_event());

        assert_eq!(event.summary.as_deref(), Some("Consultation request"));
        assert!(event.description.unwrap().starts_with("From: Jane Doe"));

        let start = event.start.unwrap();
        assert_eq!(start.time_zone.as_deref(), Some("UTC"));
        assert_eq!(
            start.date_time.unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap()
        );
        let end = event.end.unwrap();
        assert_eq!(
            end.date_time.unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap()
        );

        let attendees = event.attendees.unwrap();
        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_send_updates_notifies_all_attendees() {
        let event = sample_event();
        assert_eq!(send_updates(&event), "all");

        let quiet = CalendarEvent {
            notify_attendees: false,
            ..sample_event()
        };
        assert_eq!(send_updates(&quiet), "none");
    }

    #[test]
    fn test_created_result_reads_id_and_status() {
        let confirmed = created_result(Event {
            id: Some("evt-1".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(confirmed.event_id.as_deref(), Some("evt-1"));
        assert_eq!(confirmed.status, "confirmed");

        let tentative = created_result(Event {
            id: Some("evt-2".to_string()),
            status: Some("tentative".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(tentative.status, "tentative");
    }

    #[test]
    fn test_cancelled_event_is_rejected() {
        let err = created_result(Event {
            id: Some("evt-3".to_string()),
            status: Some("cancelled".to_string()),
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, GcalServiceError::Rejected(ref m) if m.contains("evt-3")));
    }

    #[tokio::test]
    async fn test_create_event_without_credentials_fails_cleanly() {
        let service = GoogleCalendarService::new(GcalConfig::default());

        let err = service
            .create_event("primary", sample_event())
            .await
            .unwrap_err();

        assert!(
            matches!(err, GcalServiceError::MissingCredentials(ref field) if field == "client_email"),
            "unexpected error: {err}"
        );
    }
}
