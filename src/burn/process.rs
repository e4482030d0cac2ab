use console::style;
use mpl_token_metadata::instruction::burn_nft;
use spl_token::ID as TOKEN_PROGRAM_ID;

use crate::common::*;
use crate::parse::parse_pubkey;
use crate::pdas::{
    find_associated_token_pda, find_master_edition_pda, find_metadata_pda, get_metadata,
};
use crate::utils::*;

pub struct BurnArgs {
    pub keypair: Option<String>,
    pub rpc_url: Option<String>,
    pub payer: Option<String>,
    pub mint: String,
    pub collection_mint: Option<String>,
    pub blockhash: Option<String>,
}

pub fn process_burn(args: BurnArgs) -> Result<()> {
    let nft_config = nft_setup(args.keypair, args.rpc_url, args.payer)?;
    let mint = parse_pubkey("mint address", &args.mint)?;
    let client = setup_client(&nft_config.rpc_url);

    eprintln!(
        "{} {}Looking up NFT metadata",
        style("[1/2]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );

    let collection_mint = match args.collection_mint.as_deref() {
        Some(collection_mint) => resolve_burn_collection(&client, &mint, Some(collection_mint))?,
        None => {
            let pb = spinner_with_style();
            pb.set_message("Connecting...");
            let collection_mint = resolve_burn_collection(&client, &mint, None);
            pb.finish_and_clear();
            collection_mint?
        }
    };

    eprintln!(
        "{} {}Building burn transaction",
        style("[2/2]").bold().dim(),
        FIRE_EMOJI
    );

    let tx = get_nft_burn_tx(&nft_config.payer, &mint, collection_mint.as_ref());
    info!(
        "Burn {} owned by {} (collection: {:?})",
        mint, nft_config.payer, collection_mint
    );

    let blockhash = resolve_blockhash(args.blockhash, &client)?;

    let mut output = TransactionsOutput::new(&mut [tx], blockhash)?;
    output.mint = Some(mint);
    output.metadata = Some(find_metadata_pda(&mint));
    output.edition = Some(find_master_edition_pda(&mint));

    print_output(&output)
}

/// Collection whose metadata the burn has to include.
///
/// An explicit `collection_mint` is used as is and skips the lookup, otherwise
/// the collection recorded in the NFT's on-chain metadata is used.
pub fn resolve_burn_collection(
    rpc: &RpcClient,
    mint: &Pubkey,
    collection_mint: Option<&str>,
) -> Result<Option<Pubkey>> {
    if let Some(collection_mint) = collection_mint {
        return Ok(Some(parse_pubkey(
            "collection mint address",
            collection_mint,
        )?));
    }

    let metadata = get_metadata(rpc, mint)?;
    debug!("Collection of {} read from chain: {:?}", mint, metadata.collection);

    Ok(metadata.collection.map(|c| c.key))
}

pub fn get_nft_burn_ix(
    owner: &Pubkey,
    mint: &Pubkey,
    collection_mint: Option<&Pubkey>,
) -> Instruction {
    burn_nft(
        mpl_token_metadata::ID,
        find_metadata_pda(mint),
        *owner,
        *mint,
        find_associated_token_pda(owner, mint),
        find_master_edition_pda(mint),
        TOKEN_PROGRAM_ID,
        collection_mint.map(find_metadata_pda),
    )
}

/// Burns the NFT held in the owner's associated token account, closing its
/// metadata and master edition. Pass the collection mint when the NFT belongs to
/// a collection so its metadata is included.
pub fn get_nft_burn_tx(
    owner: &Pubkey,
    mint: &Pubkey,
    collection_mint: Option<&Pubkey>,
) -> Transaction {
    Transaction::new_with_payer(
        &[get_nft_burn_ix(owner, mint, collection_mint)],
        Some(owner),
    )
}

#[cfg(test)]
mod tests {
    use mpl_token_metadata::state::{Collection, Metadata};

    use super::*;
    use crate::pdas::mocks::{encoded_metadata, metadata_account};

    #[test]
    fn burn_accounts_without_collection() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ix = get_nft_burn_ix(&owner, &mint, None);

        assert_eq!(ix.program_id, mpl_token_metadata::ID);
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|a| a.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                find_metadata_pda(&mint),
                owner,
                mint,
                find_associated_token_pda(&owner, &mint),
                find_master_edition_pda(&mint),
                TOKEN_PROGRAM_ID,
            ]
        );
        assert!(ix.accounts[1].is_signer);
        assert!(!ix.accounts[5].is_writable);
    }

    #[test]
    fn burn_includes_collection_metadata() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let collection_mint = Pubkey::new_unique();

        let ix = get_nft_burn_ix(&owner, &mint, Some(&collection_mint));

        assert_eq!(ix.accounts.len(), 7);
        assert_eq!(ix.accounts[6].pubkey, find_metadata_pda(&collection_mint));
        assert!(ix.accounts[6].is_writable);
    }

    #[test]
    fn owner_pays_and_signs() {
        let owner = Pubkey::new_unique();
        let tx = get_nft_burn_tx(&owner, &Pubkey::new_unique(), None);

        assert_eq!(tx.message.account_keys[0], owner);
        assert_eq!(tx.message.header.num_required_signatures, 1);
    }

    #[test]
    fn collection_read_from_metadata() {
        let mint = Pubkey::new_unique();
        let collection_mint = Pubkey::new_unique();
        let metadata = Metadata {
            mint,
            collection: Some(Collection {
                verified: true,
                key: collection_mint,
            }),
            ..Metadata::default()
        };
        let rpc = RpcClient::new_mock_with_mocks(
            "succeeds",
            metadata_account(&encoded_metadata(&metadata)),
        );

        assert_eq!(
            resolve_burn_collection(&rpc, &mint, None).unwrap(),
            Some(collection_mint)
        );

        let rpc = RpcClient::new_mock_with_mocks(
            "succeeds",
            metadata_account(&encoded_metadata(&Metadata::default())),
        );
        assert_eq!(resolve_burn_collection(&rpc, &mint, None).unwrap(), None);
    }

    #[test]
    fn explicit_collection_skips_lookup() {
        let mint = Pubkey::new_unique();
        let collection_mint = Pubkey::new_unique();
        // every request against this client fails
        let rpc = RpcClient::new_mock("fails");

        let resolved =
            resolve_burn_collection(&rpc, &mint, Some(&collection_mint.to_string())).unwrap();
        assert_eq!(resolved, Some(collection_mint));

        let err = resolve_burn_collection(&rpc, &mint, Some("not-a-key")).unwrap_err();
        assert!(err.to_string().contains("collection mint address"));
    }

    #[test]
    fn missing_metadata_fails_burn_lookup() {
        let rpc = RpcClient::new_mock("succeeds");

        let err = resolve_burn_collection(&rpc, &Pubkey::new_unique(), None).unwrap_err();
        assert!(err.to_string().contains("Couldn't find metadata account"));
    }
}
