use charitable_core::{AuthError, Email, Password};
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

/// Optional settings file, any format the `config` crate understands.
pub const CONFIG_FILE: &str = "config/charitable";
/// Environment overrides look like `CHARITABLE__APP__ADDRESS`.
pub const ENV_PREFIX: &str = "CHARITABLE";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] ConfigError),
    #[error("Failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
    #[error("Demo account {index} is invalid: {source}")]
    DemoAccount { index: usize, source: AuthError },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_address")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    /// Accounts seeded into the in-memory gateway
    #[serde(default)]
    pub demo_accounts: Vec<DemoAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoAccount {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

fn default_address() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Settings {
    /// Load settings from `.env`, the optional settings file and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        load_dotenv(dotenvy::dotenv().map(|_| ()))?;

        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(environment()),
        )
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

/// `CHARITABLE__` prefixed variables, `__` between nested keys.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

/// A missing `.env` is fine; one that fails to parse is not.
fn load_dotenv(result: Result<(), dotenvy::Error>) -> Result<(), SettingsError> {
    match result {
        Err(e) if e.not_found() => Ok(()),
        other => Ok(other?),
    }
}

impl AuthSettings {
    /// Parse the demo accounts into domain credentials.
    pub fn demo_credentials(&self) -> Result<Vec<(Email, Password)>, SettingsError> {
        self.demo_accounts
            .iter()
            .enumerate()
            .map(|(index, account)| {
                let email = Email::try_from(account.email.clone())
                    .map_err(|e| SettingsError::DemoAccount {
                        index,
                        source: e.into(),
                    })?;
                let password = Password::try_from(account.password.clone()).map_err(|e| {
                    SettingsError::DemoAccount {
                        index,
                        source: e.into(),
                    }
                })?;
                Ok((email, password))
            })
            .collect()
    }
}
