use console::style;
use mpl_token_metadata::instruction::{create_master_edition_v3, create_metadata_accounts_v3};

use crate::common::*;
use crate::metadata::{load_metadata_json, MetadataJson};
use crate::parse::parse_pubkey;
use crate::pdas::{find_master_edition_pda, find_metadata_pda, get_mint_rent};
use crate::token::prepare_token_account_and_mint_txs;
use crate::utils::*;
use crate::verify::get_verify_collection_tx;

pub struct MintArgs {
    pub keypair: Option<String>,
    pub rpc_url: Option<String>,
    pub payer: Option<String>,
    pub metadata: String,
    pub mint: String,
    pub owner: Option<String>,
    pub max_supply: Option<u64>,
    pub rent: Option<u64>,
    pub blockhash: Option<String>,
}

/// Every transaction needed to mint one NFT, in submission order.
#[derive(Debug, Clone)]
pub struct NftMintTxs {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub edition: Pubkey,
    pub recipient: Pubkey,
    pub transactions: Vec<Transaction>,
}

pub fn process_mint(args: MintArgs) -> Result<()> {
    let nft_config = nft_setup(args.keypair, args.rpc_url, args.payer)?;
    let metadata_json = load_metadata_json(&args.metadata)?;
    let mint = parse_pubkey("mint address", &args.mint)?;
    let owner = match args.owner {
        Some(ref owner) => parse_pubkey("owner address", owner)?,
        None => nft_config.payer,
    };

    eprintln!(
        "{} {}Loading cluster state",
        style("[1/2]").bold().dim(),
        LOOKING_GLASS_EMOJI
    );

    let client = setup_client(&nft_config.rpc_url);

    let pb = if args.rent.is_none() || args.blockhash.is_none() {
        let pb = spinner_with_style();
        pb.set_message("Connecting...");
        Some(pb)
    } else {
        None
    };
    let cluster_state = load_cluster_state(&client, args.rent, args.blockhash);
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let (rent, blockhash) = cluster_state?;

    eprintln!(
        "{} {}Building mint transactions",
        style("[2/2]").bold().dim(),
        MINT_EMOJI
    );

    let nft = get_nft_mint_txs(
        &nft_config.payer,
        &owner,
        &metadata_json,
        &mint,
        rent,
        args.max_supply,
    )?;

    info!(
        "Built {} transactions minting {} to {}",
        nft.transactions.len(),
        nft.mint,
        nft.recipient
    );

    let NftMintTxs {
        mint,
        metadata,
        edition,
        recipient,
        mut transactions,
    } = nft;

    let mut output = TransactionsOutput::new(&mut transactions, blockhash)?;
    output.mint = Some(mint);
    output.metadata = Some(metadata);
    output.edition = Some(edition);
    output.recipient = Some(recipient);

    print_output(&output)
}

/// Mint rent and recent blockhash, querying the cluster only for what was not given.
fn load_cluster_state(
    client: &RpcClient,
    rent: Option<u64>,
    blockhash: Option<String>,
) -> Result<(u64, Hash)> {
    let rent = match rent {
        Some(rent) => rent,
        None => get_mint_rent(client)?,
    };
    let blockhash = resolve_blockhash(blockhash, client)?;

    Ok((rent, blockhash))
}

pub fn get_create_metadata_ix(
    payer: &Pubkey,
    owner: &Pubkey,
    metadata_json: &MetadataJson,
    mint: &Pubkey,
) -> Result<Instruction> {
    let data = metadata_json.to_data_v2(owner, false)?;

    Ok(create_metadata_accounts_v3(
        mpl_token_metadata::ID,
        find_metadata_pda(mint),
        *mint,
        *payer,
        *payer,
        *payer,
        data.name,
        data.symbol,
        data.uri,
        data.creators,
        data.seller_fee_basis_points,
        true,
        true,
        data.collection,
        data.uses,
        None,
    ))
}

pub fn get_create_master_edition_ix(
    payer: &Pubkey,
    mint: &Pubkey,
    max_supply: Option<u64>,
) -> Instruction {
    create_master_edition_v3(
        mpl_token_metadata::ID,
        find_master_edition_pda(mint),
        *mint,
        *payer,
        *payer,
        find_metadata_pda(mint),
        *payer,
        max_supply,
    )
}

/// Builds every transaction needed to mint one NFT to `owner`.
///
/// The order is: create mint, create metadata, create the owner's token account,
/// mint one token, create the master edition and, when the metadata names a
/// collection, verify it. `mint` must co-sign the first transaction and `payer`
/// signs all of them.
///
/// A creator whose address is `owner` is marked verified. The token metadata
/// program only accepts a verified creator that signs the instruction, and only
/// `payer` signs it, so when `owner` differs from `payer` such a creator makes
/// the create metadata transaction fail on chain.
pub fn get_nft_mint_txs(
    payer: &Pubkey,
    owner: &Pubkey,
    metadata_json: &MetadataJson,
    mint: &Pubkey,
    rent: u64,
    max_supply: Option<u64>,
) -> Result<NftMintTxs> {
    let collection = metadata_json.collection_key()?;
    let create_metadata_ix = get_create_metadata_ix(payer, owner, metadata_json, mint)?;

    let mint_txs = prepare_token_account_and_mint_txs(payer, owner, mint, rent)?;

    let create_metadata_tx = Transaction::new_with_payer(&[create_metadata_ix], Some(payer));
    let master_edition_tx = Transaction::new_with_payer(
        &[get_create_master_edition_ix(payer, mint, max_supply)],
        Some(payer),
    );

    let mut transactions = vec![
        mint_txs.create_mint_tx,
        create_metadata_tx,
        mint_txs.create_associated_token_account_tx,
        mint_txs.mint_to_tx,
        master_edition_tx,
    ];

    if let Some(collection_mint) = collection {
        debug!("Adding verify collection {} for {}", collection_mint, mint);
        transactions.push(get_verify_collection_tx(payer, mint, &collection_mint));
    }

    Ok(NftMintTxs {
        mint: *mint,
        metadata: find_metadata_pda(mint),
        edition: find_master_edition_pda(mint),
        recipient: mint_txs.recipient,
        transactions,
    })
}
