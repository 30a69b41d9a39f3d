// --- File: crates/contactbook_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared form schema and outcome
pub mod services; // Service abstractions

pub use error::{ContactbookError, HttpStatusCode};

pub use http::IntoHttpResponse;

pub use features::{is_feature_enabled, is_gcal_enabled};

pub use models::{BookingFields, BookingOutcome, ContactForm};
