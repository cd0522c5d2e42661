use super::error_code::{self, HcErrorCode};

/// Top-level error type for setup and registration.
///
/// Producing a health payload never fails; these errors only surface while
/// configuring the module or wiring its entry points into a host.
#[derive(Debug, thiserror::Error)]
pub enum HcError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("entry point '{name}' is already registered")]
    DuplicateEntryPoint { name: String },

    #[error("no entry point registered under '{name}'")]
    UnknownEntryPoint { name: String },

    #[error("runtime already initialized")]
    AlreadyInitialized,

    #[error("host error: {message}")]
    HostError { message: String },
}

impl HcErrorCode for HcError {
    fn error_code(&self) -> &'static str {
        match self {
            HcError::ConfigError(_) | HcError::TomlError(_) => error_code::CONFIG_ERROR,
            HcError::SerializationError(_) => error_code::SERIALIZATION_ERROR,
            HcError::DuplicateEntryPoint { .. } => error_code::DUPLICATE_ENTRY_POINT,
            HcError::UnknownEntryPoint { .. } => error_code::UNKNOWN_ENTRY_POINT,
            HcError::AlreadyInitialized => error_code::ALREADY_INITIALIZED,
            HcError::HostError { .. } => error_code::HOST_ERROR,
        }
    }
}
