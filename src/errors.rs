use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to read keypair file '{0}': {1}")]
    KeypairFileError(String, String),

    #[error("Invalid payer address: {0}")]
    InvalidPayerAddress(String),

    #[error("Invalid blockhash: {0}")]
    InvalidBlockhash(String),
}
