use anchor_lang::prelude::*;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::Mint;

use crate::constants::{SPL_ACCOUNT_COMPRESSION_ID, SPL_NOOP_ID};

/// Mint one compressed leaf into an existing tree, attached to a
/// verified collection
#[derive(Accounts)]
pub struct MintLeaf<'info> {
    /// Requester; pays for the call and owns the minted leaf
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Authority record; signs the mint CPI as tree delegate and as the
    /// collection's metadata update authority
    /// CHECK: Derivation enforced by the binding validator
    pub authority_record: UncheckedAccount<'info>,

    /// Per-tree authority PDA of the minting service
    /// CHECK: Derivation enforced by the binding validator; its recorded
    /// authority is checked against the authority record before the CPI
    #[account(mut)]
    pub tree_authority: UncheckedAccount<'info>,

    /// CHECK: Ownership and root transitions enforced by the compression
    /// service
    #[account(mut)]
    pub merkle_tree: UncheckedAccount<'info>,

    /// Fixed-label delegated signer of the minting service
    /// CHECK: Derivation enforced by the binding validator
    pub collection_signer: UncheckedAccount<'info>,

    pub collection_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub collection_metadata: Box<Account<'info, MetadataAccount>>,

    /// Master edition record of the collection
    /// CHECK: Validated by the metadata service during the CPI
    pub collection_edition: UncheckedAccount<'info>,

    /// CHECK: Verified by address constraint
    #[account(address = SPL_NOOP_ID)]
    pub log_wrapper: UncheckedAccount<'info>,

    /// CHECK: Verified by address constraint
    #[account(address = SPL_ACCOUNT_COMPRESSION_ID)]
    pub compression_program: UncheckedAccount<'info>,

    /// CHECK: Verified by address constraint
    #[account(address = mpl_bubblegum::ID)]
    pub bubblegum_program: UncheckedAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,

    pub system_program: Program<'info, System>,
}
