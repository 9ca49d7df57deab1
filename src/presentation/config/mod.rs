mod settings;

pub use settings::{
    CompletionSettings, Environment, LoggingSettings, ServerSettings, Settings, SettingsError,
    TranscriptionProviderSetting, TranscriptionSettings,
};
