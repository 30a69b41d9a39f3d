// --- File: crates/contactbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Calendar that receives booked appointments unless configured otherwise.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Write access to calendars, nothing else.
pub const DEFAULT_CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

/// Used when `gcal.request_timeout_secs` is not set.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Google Calendar Config ---
// Credentials may be given as "secret_from_env" and are then resolved from
// CONTACTBOOK_SECRET_GCAL_<FIELD> or GCAL_<FIELD>. GOOGLE_CLIENT_EMAIL and
// GOOGLE_PRIVATE_KEY are read as a last resort.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    pub calendar_id: Option<String>,
    /// Path to a service account JSON key. Takes precedence over the inline credentials.
    pub key_path: Option<String>,
    pub client_email: Option<String>,
    pub private_key: Option<String>,
    pub scope: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl GcalConfig {
    pub fn calendar_id(&self) -> &str {
        self.calendar_id.as_deref().unwrap_or(DEFAULT_CALENDAR_ID)
    }

    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_CALENDAR_SCOPE)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
}
