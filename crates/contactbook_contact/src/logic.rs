// --- File: crates/contactbook_contact/src/logic.rs ---
use contactbook_common::{BookingOutcome, ContactForm, ContactbookError};
use contactbook_gcal::GcalState;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub const RECEIVED_MESSAGE: &str = "We've received your message and will get back to you soon.";

/// Acknowledgement of a submitted contact form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ContactReceipt {
    pub received: bool,
    #[cfg_attr(feature = "openapi", schema(example = "We've received your message and will get back to you soon."))]
    pub message: String,
    /// Result of the booking, present only when one was attempted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<BookingOutcome>,
}

impl ContactReceipt {
    fn received(calendar: Option<BookingOutcome>) -> Self {
        Self {
            received: true,
            message: RECEIVED_MESSAGE.to_string(),
            calendar,
        }
    }
}

/// Checks the form and books an appointment when one is requested.
///
/// `gcal` is `None` when booking is disabled; a requested booking then fails
/// with the generic outcome while the message itself is still received.
pub async fn submit_contact_form(
    gcal: Option<&GcalState>,
    form: ContactForm,
) -> Result<ContactReceipt, ContactbookError> {
    form.validate_shape()?;

    if !form.wants_booking() {
        info!("Contact message received from {}", form.fields.email);
        return Ok(ContactReceipt::received(None));
    }

    let outcome = match gcal {
        Some(state) => state.book(&form.to_form_data()).await,
        None => {
            error!("Appointment requested but calendar booking is disabled");
            BookingOutcome::failed()
        }
    };

    Ok(ContactReceipt::received(Some(outcome)))
}
