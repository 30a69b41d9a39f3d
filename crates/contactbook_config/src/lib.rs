use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};

pub mod env_vars;
pub mod models;
pub use models::*;

/// Loads configuration from `config/default.*`, `config/{RUN_ENV}.*` and
/// `CONTACTBOOK__*` environment variables, then resolves secrets.
///
/// The directory can be moved with `CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Same as [`load_config`] with an explicit config directory.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    tracing::debug!(
        "loading config: default={}, env={}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    env_vars::inject_env_vars(&mut json);
    let mut config: AppConfig = serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))?;
    apply_google_env_fallbacks(&mut config);
    Ok(config)
}

/// Fills missing service account credentials from `GOOGLE_CLIENT_EMAIL` and
/// `GOOGLE_PRIVATE_KEY`.
fn apply_google_env_fallbacks(config: &mut AppConfig) {
    let Some(gcal) = config.gcal.as_mut() else {
        return;
    };
    if gcal.client_email.is_none() {
        gcal.client_email = env::var("GOOGLE_CLIENT_EMAIL").ok();
    }
    if gcal.private_key.is_none() {
        gcal.private_key = env::var("GOOGLE_PRIVATE_KEY").ok();
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, otherwise the first command line
/// argument when it starts with `.env`, otherwise `.env`. Loading happens
/// once per process; the chosen path is returned.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = std::env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
