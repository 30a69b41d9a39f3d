//! Environment variable handling for the Contactbook application.
//!
//! Configuration values use the `CONTACTBOOK__SECTION__KEY` pattern and are
//! picked up by the `config` crate directly. Secrets are marked in the config
//! files with the literal string `"secret_from_env"` and resolved here.

use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "CONTACTBOOK";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "CONTACTBOOK_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value that asks for a secret to be read from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a secret path to an environment variable name
///
/// # Arguments
///
/// * `path` - The secret path (e.g., "gcal.private_key")
///
/// # Returns
///
/// The environment variable name (e.g., "CONTACTBOOK_SECRET_GCAL_PRIVATE_KEY")
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to the short environment variable name
///
/// # Arguments
///
/// * `path` - The secret path (e.g., "gcal.client_email")
///
/// # Returns
///
/// The environment variable name (e.g., "GCAL_CLIENT_EMAIL")
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// Get an environment variable for a secret path
///
/// Tries the prefixed name first and falls back to the short one.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    let env_var = secret_path_to_env_var(path);
    if let Ok(value) = env::var(&env_var) {
        return Some(value);
    }

    let legacy_env_var = legacy_secret_path_to_env_var(path);
    env::var(&legacy_env_var).ok()
}

/// Inject environment variables into a JSON value
///
/// Recursively replaces `"secret_from_env"` strings with values from
/// environment variables. A marker without a matching variable becomes
/// `null`, so optional secrets stay unset instead of carrying the marker.
///
/// # Returns
///
/// `true` if any values were replaced, `false` otherwise
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    use serde_json::Value;

    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    let mut new_path = path.clone();
                    new_path.push(i.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_secret_env_var(&path_str) {
                    *obj = Value::String(env_val);
                    replaced = true;
                } else {
                    warn!("env var for {} not found", path_str);
                    *obj = Value::Null;
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}
