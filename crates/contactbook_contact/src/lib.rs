// --- File: crates/contactbook_contact/src/lib.rs ---
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;

pub use handlers::ContactState;
pub use routes::routes;
