use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unknown project status: {value}")]
    UnknownStatus { value: String },

    #[error("Unknown project type: {value}")]
    UnknownProjectType { value: String },

    #[error("Unknown sort direction: {value}")]
    UnknownSortDirection { value: String },

    #[error("Malformed plural template {template:?}: {reason}")]
    MalformedTemplate { template: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
