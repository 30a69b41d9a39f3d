//! Runtime feature flags.
//!
//! A feature is active when its `use_*` flag is set and its configuration
//! section is present.

use contactbook_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the Google Calendar booking feature is enabled at runtime.
pub fn is_gcal_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_gcal, config.gcal.as_ref())
}
