use anchor_lang::prelude::*;

/// Event emitted when a tree is provisioned and its authority handed to
/// the authority record
#[event]
pub struct TreeProvisioned {
    pub merkle_tree: Pubkey,
    pub tree_authority: Pubkey,
    pub payer: Pubkey,
    pub max_depth: u32,
    pub max_buffer_size: u32,
}
