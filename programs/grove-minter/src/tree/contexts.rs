use anchor_lang::prelude::*;

use crate::constants::{SPL_ACCOUNT_COMPRESSION_ID, SPL_NOOP_ID};

/// Provision a new concurrent merkle tree whose authority is this
/// program's authority record.
///
/// The tree account must already be allocated to the size implied by the
/// requested shape and owned by the compression service; allocation is a
/// client responsibility.
#[derive(Accounts)]
pub struct ProvisionTree<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Authority record; signs the create CPI as tree creator
    /// CHECK: Derivation enforced by the binding validator
    pub authority_record: UncheckedAccount<'info>,

    /// Per-tree authority PDA of the minting service
    /// CHECK: Derivation enforced by the binding validator
    #[account(mut)]
    pub tree_authority: UncheckedAccount<'info>,

    /// CHECK: Size and ownership validated by the compression service CPI
    #[account(mut)]
    pub merkle_tree: UncheckedAccount<'info>,

    /// CHECK: Verified by address constraint
    #[account(address = SPL_NOOP_ID)]
    pub log_wrapper: UncheckedAccount<'info>,

    /// CHECK: Verified by address constraint
    #[account(address = SPL_ACCOUNT_COMPRESSION_ID)]
    pub compression_program: UncheckedAccount<'info>,

    /// CHECK: Verified by address constraint
    #[account(address = mpl_bubblegum::ID)]
    pub bubblegum_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
