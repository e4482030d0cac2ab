use mpl_token_metadata::{
    pda::{find_master_edition_account, find_metadata_account},
    state::{Metadata, TokenMetadataAccount},
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use thiserror::Error;

use crate::constants::MINT_LAYOUT;

pub type PdaInfo<T> = (Pubkey, T);

#[derive(Debug, Error)]
pub enum PdaError {
    #[error("Couldn't find metadata account {0}: {1}")]
    MetadataNotFound(String, String),

    #[error("Failed to deserialize metadata account: {0}")]
    InvalidMetadata(String),

    #[error("Failed to get rent exemption for a mint account: {0}")]
    RentUnavailable(String),
}

pub fn find_metadata_pda(mint: &Pubkey) -> Pubkey {
    let (pda, _bump) = find_metadata_account(mint);

    pda
}

pub fn find_master_edition_pda(mint: &Pubkey) -> Pubkey {
    let (pda, _bump) = find_master_edition_account(mint);

    pda
}

pub fn find_associated_token_pda(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

pub fn get_metadata_pda(mint: &Pubkey, rpc: &RpcClient) -> Result<PdaInfo<Metadata>, PdaError> {
    let metadata_pubkey = find_metadata_pda(mint);
    let metadata_account = rpc
        .get_account(&metadata_pubkey)
        .map_err(|err| {
            PdaError::MetadataNotFound(metadata_pubkey.to_string(), err.to_string())
        })?;

    let metadata = Metadata::safe_deserialize(metadata_account.data.as_slice())
        .map_err(|_| PdaError::InvalidMetadata(metadata_pubkey.to_string()))?;

    Ok((metadata_pubkey, metadata))
}

/// Fetches and decodes the metadata account of `mint`.
pub fn get_metadata(rpc: &RpcClient, mint: &Pubkey) -> Result<Metadata, PdaError> {
    get_metadata_pda(mint, rpc).map(|(_, metadata)| metadata)
}

/// Lamports needed to keep a fresh mint account rent exempt.
pub fn get_mint_rent(rpc: &RpcClient) -> Result<u64, PdaError> {
    rpc.get_minimum_balance_for_rent_exemption(MINT_LAYOUT as usize)
        .map_err(|err| PdaError::RentUnavailable(err.to_string()))
}
