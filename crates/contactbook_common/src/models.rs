// --- File: crates/contactbook_common/src/models.rs ---
//! Data shared by the contact form and the booking service.
//!
//! [`BookingFields`] is the single validation schema. The form checks it
//! before submitting and the booking service checks it again on the server,
//! so both sides always agree on what a valid request is.

use crate::error::FieldMessages;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationErrors};

/// Flat request keys as sent by the form.
pub mod keys {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const SUBJECT: &str = "subject";
    pub const MESSAGE: &str = "message";
    pub const EVENT_DATE: &str = "eventDate";
    pub const EVENT_TIME: &str = "eventTime";
    pub const ADD_TO_CALENDAR: &str = "addToCalendar";
}

/// Submitter-provided fields describing a message and, optionally, an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFields {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    #[cfg_attr(feature = "openapi", schema(example = "jane@example.com"))]
    pub email: String,
    #[validate(length(min = 5, message = "Subject must be at least 5 characters."))]
    #[cfg_attr(feature = "openapi", schema(example = "Consultation request"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    #[cfg_attr(
        feature = "openapi",
        schema(example = "I would like to discuss pricing options.")
    )]
    pub message: String,
    /// `YYYY-MM-DD`, only checked when an appointment is booked.
    #[cfg_attr(feature = "openapi", schema(example = "2024-06-01"))]
    pub event_date: String,
    /// `HH:MM` or `HH:MM:SS`, only checked when an appointment is booked.
    #[cfg_attr(feature = "openapi", schema(example = "14:00"))]
    pub event_time: String,
}

impl BookingFields {
    /// Reads the fields from a flat request. Missing keys become empty strings.
    pub fn from_form_data(data: &HashMap<String, String>) -> Self {
        let get = |key: &str| data.get(key).cloned().unwrap_or_default();
        Self {
            name: get(keys::NAME),
            email: get(keys::EMAIL),
            subject: get(keys::SUBJECT),
            message: get(keys::MESSAGE),
            event_date: get(keys::EVENT_DATE),
            event_time: get(keys::EVENT_TIME),
        }
    }

    /// Body of the calendar event created for these fields.
    pub fn event_description(&self) -> String {
        format!("From: {} ({})\n\n{}", self.name, self.email, self.message)
    }
}

/// Everything the contact form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(flatten)]
    pub fields: BookingFields,
    #[serde(default)]
    pub add_to_calendar: bool,
}

impl ContactForm {
    /// Shape checks run before submitting. Date and time are not checked here.
    pub fn validate_shape(&self) -> Result<(), ValidationErrors> {
        self.fields.validate()
    }

    /// Booking is attempted only when requested and both date and time are filled in.
    pub fn wants_booking(&self) -> bool {
        self.add_to_calendar
            && !self.fields.event_date.is_empty()
            && !self.fields.event_time.is_empty()
    }

    /// Serializes the form into the flat request the booking service accepts.
    pub fn to_form_data(&self) -> HashMap<String, String> {
        let f = &self.fields;
        HashMap::from([
            (keys::NAME.to_string(), f.name.clone()),
            (keys::EMAIL.to_string(), f.email.clone()),
            (keys::SUBJECT.to_string(), f.subject.clone()),
            (keys::MESSAGE.to_string(), f.message.clone()),
            (keys::EVENT_DATE.to_string(), f.event_date.clone()),
            (keys::EVENT_TIME.to_string(), f.event_time.clone()),
            (
                keys::ADD_TO_CALENDAR.to_string(),
                self.add_to_calendar.to_string(),
            ),
        ])
    }
}

/// Normalized result of a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingOutcome {
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(example = "Appointment booked successfully!"))]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "abc123xyz456"))]
    pub event_id: Option<String>,
}

impl BookingOutcome {
    pub const BOOKED_MESSAGE: &'static str = "Appointment booked successfully!";
    pub const FAILED_MESSAGE: &'static str = "Failed to book appointment. Please try again.";

    pub fn booked(event_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Self::BOOKED_MESSAGE.to_string(),
            event_id: Some(event_id.into()),
        }
    }

    /// The one failure every cause collapses into.
    pub fn failed() -> Self {
        Self {
            success: false,
            message: Self::FAILED_MESSAGE.to_string(),
            event_id: None,
        }
    }
}

/// Human readable messages per failing field.
pub fn field_messages(errors: &ValidationErrors) -> FieldMessages {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// `field: rule` pairs for logs, sorted by field.
pub fn violated_rules(errors: &ValidationErrors) -> String {
    let mut rules: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("{}: {}", field, e.code))
                .collect::<Vec<_>>()
        })
        .collect();
    rules.sort();
    rules.join(", ")
}
