// --- File: crates/contactbook_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The booking pipeline talks to its calendar provider only through
//! [`CalendarService`], so tests can swap in an in-memory implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for calendar service operations.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a calendar event.
    ///
    /// Either the event exists afterwards and its id is returned, or the call
    /// fails and nothing was created.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// Data structures for calendar service operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The summary or title of the event.
    pub summary: String,
    /// An optional description of the event.
    pub description: Option<String>,
    /// The start time of the event.
    pub start_time: DateTime<Utc>,
    /// The end time of the event.
    pub end_time: DateTime<Utc>,
    /// Zone tag sent along with both instants.
    pub time_zone: String,
    /// Attendee email addresses.
    pub attendees: Vec<String>,
    /// Whether the provider should email the attendees.
    pub notify_attendees: bool,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// The status of the event.
    pub status: String,
}
