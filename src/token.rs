use anyhow::Result;
use solana_sdk::{pubkey::Pubkey, system_instruction, transaction::Transaction};
use spl_associated_token_account::instruction::create_associated_token_account;
use spl_token::{
    instruction::{initialize_mint, mint_to},
    ID as TOKEN_PROGRAM_ID,
};

use crate::{constants::MINT_LAYOUT, pdas::find_associated_token_pda};

/// Token-program transactions that precede the metadata ones when minting an NFT.
#[derive(Debug, Clone)]
pub struct MintTxs {
    pub recipient: Pubkey,
    pub create_mint_tx: Transaction,
    pub create_associated_token_account_tx: Transaction,
    pub mint_to_tx: Transaction,
}

/// Allocates and initializes a mint account. Both `payer` and `mint` sign.
pub fn create_mint_tx(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    rent: u64,
) -> Result<Transaction> {
    let create_mint_account_ix =
        system_instruction::create_account(payer, mint, rent, MINT_LAYOUT, &TOKEN_PROGRAM_ID);

    let init_mint_ix = initialize_mint(
        &TOKEN_PROGRAM_ID,
        mint,
        mint_authority,
        freeze_authority,
        decimals,
    )?;

    Ok(Transaction::new_with_payer(
        &[create_mint_account_ix, init_mint_ix],
        Some(payer),
    ))
}

/// Returns the owner's associated token address together with the transaction creating it.
pub fn create_associated_token_account_tx(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> (Pubkey, Transaction) {
    let ata = find_associated_token_pda(owner, mint);
    let create_assoc_account_ix =
        create_associated_token_account(payer, owner, mint, &TOKEN_PROGRAM_ID);

    (
        ata,
        Transaction::new_with_payer(&[create_assoc_account_ix], Some(payer)),
    )
}

pub fn mint_to_tx(
    payer: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Transaction> {
    let mint_to_ix = mint_to(&TOKEN_PROGRAM_ID, mint, destination, authority, &[], amount)?;

    Ok(Transaction::new_with_payer(&[mint_to_ix], Some(payer)))
}

/// Builds the mint, token account and mint-to transactions for a single NFT.
///
/// The payer is both mint and freeze authority; the token lands in the owner's
/// associated token account.
pub fn prepare_token_account_and_mint_txs(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    rent: u64,
) -> Result<MintTxs> {
    let create_mint_tx = create_mint_tx(payer, mint, payer, Some(payer), 0, rent)?;
    let (recipient, create_associated_token_account_tx) =
        create_associated_token_account_tx(payer, owner, mint);
    let mint_to_tx = mint_to_tx(payer, mint, &recipient, payer, 1)?;

    Ok(MintTxs {
        recipient,
        create_mint_tx,
        create_associated_token_account_tx,
        mint_to_tx,
    })
}
