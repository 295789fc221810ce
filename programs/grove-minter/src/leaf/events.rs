use anchor_lang::prelude::*;

/// Event emitted when a compressed leaf is appended to a tree and
/// verified into its collection
#[event]
pub struct LeafMinted {
    pub merkle_tree: Pubkey,
    pub leaf_owner: Pubkey,
    pub collection_mint: Pubkey,
}
