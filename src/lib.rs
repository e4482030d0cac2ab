//! Builds unsigned Solana transactions that mint, update, burn and verify
//! Metaplex NFTs. Signing and sending is left to the caller.

pub mod burn;
pub mod cli;
pub mod common;
pub mod config;
pub mod constants;
pub mod errors;
pub mod metadata;
pub mod mint;
pub mod parse;
pub mod pdas;
pub mod setup;
pub mod show;
pub mod token;
pub mod update;
pub mod utils;
pub mod verify;

pub use burn::get_nft_burn_tx;
pub use metadata::MetadataJson;
pub use mint::{get_nft_mint_txs, NftMintTxs};
pub use show::PrettyMetadata;
pub use token::{prepare_token_account_and_mint_txs, MintTxs};
pub use update::get_update_metadata_tx;
pub use verify::get_verify_collection_tx;
