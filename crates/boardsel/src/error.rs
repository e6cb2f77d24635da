use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardselError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External tool error: {tool} failed: {message}")]
    ExternalTool { tool: String, message: String },

    #[error("No board connected and no usable selection in {path}: {reason}")]
    NoDeviceAvailable { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, BoardselError>;
