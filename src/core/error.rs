use thiserror::Error;

/// Errors produced while loading or validating configuration.
///
/// The simulation core itself has no runtime failure states: engines, hooks
/// and policies either succeed or unwind via panic from user code.
#[derive(Error, Debug)]
pub enum ParticulateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ParticulateError>;
