// --- File: crates/contactbook_gcal/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
#[cfg(test)]
mod routes_test;
pub mod service;

pub use handlers::GcalState;
pub use logic::{book_appointment, try_book_appointment, BookingError, BookingErrorKind};
pub use service::{GcalServiceError, GoogleCalendarService};
