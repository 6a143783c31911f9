//! Error types for the OSC tracking output

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Transport errors
///
/// None of these ever reach the caller of `OscOutput::send_tracking`;
/// they are logged and the transport degrades instead.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Socket creation failed: {0}")]
    SocketCreate(String),

    #[error("Invalid OSC host address: {0}")]
    InvalidHost(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Partial send: {sent} of {len} bytes")]
    PartialSend { sent: usize, len: usize },

    #[error("Transport is disabled")]
    Disabled,
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
