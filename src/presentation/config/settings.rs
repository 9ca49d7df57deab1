use std::fmt;

use thiserror::Error;

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "Invalid environment: {}. Expected: local, test, or prod",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Remote speech-to-text provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProviderSetting {
    Groq,
    OpenAi,
}

impl TryFrom<String> for TranscriptionProviderSetting {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "openai" => Ok(Self::OpenAi),
            other => Err(format!(
                "Invalid transcription provider: {}. Expected: groq or openai",
                other
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub completion: CompletionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub environment: Environment,
    pub json_format: bool,
}

impl Settings {
    /// Reads the full configuration from the process environment.
    ///
    /// Every variable has a default except the API keys, which stay
    /// optional here and are validated where the adapters are built.
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment = match std::env::var("APP_ENV") {
            Ok(raw) => Environment::try_from(raw)
                .map_err(|message| SettingsError::Invalid { var: "APP_ENV", message })?,
            Err(_) => Environment::Local,
        };

        let provider = match std::env::var("TRANSCRIPTION_PROVIDER") {
            Ok(raw) => TranscriptionProviderSetting::try_from(raw).map_err(|message| {
                SettingsError::Invalid { var: "TRANSCRIPTION_PROVIDER", message }
            })?,
            Err(_) => TranscriptionProviderSetting::Groq,
        };

        let groq_api_key = env_opt("GROQ_API_KEY");
        let transcription_api_key = env_opt("TRANSCRIPTION_API_KEY").or_else(|| match provider {
            TranscriptionProviderSetting::Groq => groq_api_key.clone(),
            TranscriptionProviderSetting::OpenAi => env_opt("OPENAI_API_KEY"),
        });

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("SERVER_PORT", 3000)?,
                max_upload_mb: parse_var("MAX_UPLOAD_MB", 100)?,
            },
            transcription: TranscriptionSettings {
                provider,
                api_key: transcription_api_key,
                model: env_opt("TRANSCRIPTION_MODEL"),
                base_url: env_opt("TRANSCRIPTION_BASE_URL"),
            },
            completion: CompletionSettings {
                api_key: groq_api_key,
                model: std::env::var("COMPLETION_MODEL")
                    .unwrap_or_else(|_| "llama3-8b-8192".to_string()),
                temperature: parse_var("COMPLETION_TEMPERATURE", 0.5)?,
                base_url: env_opt("COMPLETION_BASE_URL"),
            },
            logging: LoggingSettings {
                environment,
                json_format: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}

fn env_opt(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.is_empty())
}

fn parse_var<T>(var: &'static str, default: T) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
{
    match std::env::var(var) {
        Ok(raw) => raw.parse().map_err(|_| SettingsError::Invalid {
            var,
            message: format!("could not parse {:?}", raw),
        }),
        Err(_) => Ok(default),
    }
}
