// File: crates/contactbook_gcal/src/auth.rs
use contactbook_config::GcalConfig;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator, ServiceAccountKey},
    CalendarHub,
};
use serde_json::json;
use std::path::Path;

use crate::service::GcalServiceError;

/// Token endpoint for service account JWT exchange.
const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Resolves the service account key from `key_path`, or from the inline
/// `client_email` / `private_key` pair.
pub async fn resolve_service_account_key(
    config: &GcalConfig,
) -> Result<ServiceAccountKey, GcalServiceError> {
    if let Some(key_path) = config.key_path.as_deref() {
        return read_service_account_key(Path::new(key_path))
            .await
            .map_err(|e| GcalServiceError::Authentication(format!("{key_path}: {e}")));
    }

    let client_email = non_empty(config.client_email.as_deref())
        .ok_or_else(|| GcalServiceError::MissingCredentials("client_email".to_string()))?;
    let private_key = non_empty(config.private_key.as_deref())
        .ok_or_else(|| GcalServiceError::MissingCredentials("private_key".to_string()))?;

    let key = json!({
        "type": "service_account",
        "client_email": client_email,
        "private_key": unescape_private_key(private_key),
        "token_uri": GOOGLE_TOKEN_URI,
    });
    serde_json::from_value(key).map_err(|e| GcalServiceError::Authentication(e.to_string()))
}

/// Keys stored in env files usually carry literal `\n` sequences.
pub fn unescape_private_key(key: &str) -> String {
    key.replace("\\n", "\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, GcalServiceError> {
    let sa_key = resolve_service_account_key(config).await?;

    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(|e| GcalServiceError::Authentication(e.to_string()))?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| GcalServiceError::Authentication(format!("TLS roots: {e}")))?
        .https_or_http()
        .enable_http1()
        .build();

    // Create client without specifying body type
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, auth))
}
