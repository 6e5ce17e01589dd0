use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColchunkError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("Expected numeric data in column '{0}'")]
    NotNumeric(String),
    #[error("Output buffer too small: need {needed} slots, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
}

impl From<config::ConfigError> for ColchunkError {
    fn from(err: config::ConfigError) -> Self {
        ColchunkError::ConfigParsingError(err.to_string())
    }
}
