pub mod settings;

pub use settings::{
    AppSettings, AuthSettings, CONFIG_FILE, DemoAccount, ENV_PREFIX, Settings, SettingsError,
    TelemetrySettings, environment,
};
