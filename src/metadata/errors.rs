use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Serialize, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Name exceeds 32 chars.")]
    NameTooLong,

    #[error("Symbol exceeds 10 chars.")]
    SymbolTooLong,

    #[error("Uri exceeds 200 chars.")]
    UriTooLong,

    #[error("Creator address: '{0}' is invalid.")]
    InvalidCreatorAddress(String),

    #[error("Creator address: '{0}' is listed more than once.")]
    DuplicateCreatorAddress(String),

    #[error("Too many creators: {0} (max 5).")]
    TooManyCreators(usize),

    #[error("Combined creators' share does not equal 100%.")]
    InvalidCreatorShare,

    #[error("Seller fee basis points value '{0}' is invalid: must be between 0 and 10,000.")]
    InvalidSellerFeeBasisPoints(u16),

    #[error("Collection key: '{0}' is invalid.")]
    InvalidCollectionKey(String),
}
