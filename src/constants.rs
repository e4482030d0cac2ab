use console::Emoji;

pub use mpl_token_metadata::state::{
    MAX_CREATOR_LIMIT, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH,
};

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_KEYPATH: &str = "~/.config/solana/id.json";
pub const LOG_FILE: &str = "nft-txs.log";

/// Size of an SPL token mint account.
pub const MINT_LAYOUT: u64 = 82;

pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10000;
pub const TOTAL_CREATOR_SHARES: u8 = 100;

pub const COMPLETE_EMOJI: Emoji<'_, '_> = Emoji("✅ ", "");
pub const ERROR_EMOJI: Emoji<'_, '_> = Emoji("🛑 ", "");
pub const LOOKING_GLASS_EMOJI: Emoji<'_, '_> = Emoji("🔍 ", "");
pub const PAPER_EMOJI: Emoji<'_, '_> = Emoji("📝 ", "");
pub const MINT_EMOJI: Emoji<'_, '_> = Emoji("🍬 ", "");
pub const FIRE_EMOJI: Emoji<'_, '_> = Emoji("🔥 ", "");
pub const COLLECTION_EMOJI: Emoji<'_, '_> = Emoji("📦 ", "");
