//! Centralized PDA seed constants for the grove minter.
//!
//! All seeds are defined here to ensure consistency between Anchor
//! context definitions and manual seed construction in CPI signer seeds.

use anchor_lang::prelude::*;

/// SPL account-compression program ID (stores and mutates the trees)
pub const SPL_ACCOUNT_COMPRESSION_ID: Pubkey =
    pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");

/// SPL noop program ID (change-log event wrapper, passed through unchanged)
pub const SPL_NOOP_ID: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");

/// Authority record PDA seed
/// PDA: ["AUTH"]
pub const SEED_AUTHORITY: &[u8] = b"AUTH";

/// Collection-CPI signer seed published by the minting service; the
/// delegated signer it expects for collection metadata writes
/// PDA: ["collection_cpi"] under the bubblegum program
pub const SEED_COLLECTION_CPI: &[u8] = b"collection_cpi";
