use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing the metadata file: {0}")]
    ParseError(String),

    #[error("Error opening the metadata file: {0}")]
    FileOpenError(String),
}
