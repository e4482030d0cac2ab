use std::str::FromStr;

use anyhow::{anyhow, Result};
use solana_sdk::{hash::Hash, pubkey::Pubkey};

use crate::errors::SetupError;

/// Parses a base58 address, naming the argument in the error.
pub fn parse_pubkey(label: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|_| anyhow!("Failed to parse {}: {}", label, value))
}

pub fn parse_blockhash(value: &str) -> Result<Hash, SetupError> {
    Hash::from_str(value).map_err(|_| SetupError::InvalidBlockhash(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_addresses_and_hashes() {
        let key = Pubkey::new_unique();
        assert_eq!(parse_pubkey("mint", &key.to_string()).unwrap(), key);

        let err = parse_pubkey("mint", "xyz").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse mint: xyz");

        let hash = Hash::new_unique();
        assert_eq!(parse_blockhash(&hash.to_string()).unwrap(), hash);
        assert!(parse_blockhash("0").is_err());
    }
}
