use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromotionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown promotion key: {0}")]
    UnknownPromotionKey(String),

    #[error("Unknown wallet provider: {0}")]
    UnknownWalletProvider(String),
}

impl PromotionError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PromotionError::IoError(e) => format!("Could not read a file: {}", e),
            PromotionError::SerializationError(e) => format!("Invalid JSON input: {}", e),
            PromotionError::CsvError(e) => format!("Could not write CSV output: {}", e),
            PromotionError::ConfigParseError { message } => {
                format!("The catalog file is not valid TOML: {}", message)
            }
            PromotionError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            PromotionError::MissingConfigError { field } => {
                format!("{} must be provided", field)
            }
            PromotionError::UnknownPromotionKey(key) => {
                format!("'{}' is not a known promotion", key)
            }
            PromotionError::UnknownWalletProvider(provider) => {
                format!("'{}' is not a supported wallet provider", provider)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PromotionError::IoError(_) => "Check that the file exists and is readable",
            PromotionError::SerializationError(_) => {
                "Check the context file against the documented JSON shape"
            }
            PromotionError::CsvError(_) => "Check that stdout is writable",
            PromotionError::ConfigParseError { .. } => "Fix the TOML syntax in the catalog file",
            PromotionError::InvalidConfigValueError { .. } => {
                "Country codes are two uppercase letters and URLs must use http or https"
            }
            PromotionError::MissingConfigError { .. } => "Pass --country or --context",
            PromotionError::UnknownPromotionKey(_) => {
                "Valid keys: bitflyer-verification, brave-creators, gemini, tap-network, uphold-card, uphold-equities"
            }
            PromotionError::UnknownWalletProvider(_) => "Valid providers: uphold, bitflyer, gemini",
        }
    }
}

pub type Result<T> = std::result::Result<T, PromotionError>;
