use anchor_lang::prelude::*;

declare_id!("Ch5w2Xissiy9JLVwfabq41CeQ8xjwoAh3GYNVFgq5HVx");

pub mod binding;
pub mod constants;
pub mod error;
pub mod leaf;
pub mod tree;

// Re-export all contexts at crate root for Anchor macro
pub use leaf::contexts::*;
pub use leaf::events::*;
pub use tree::contexts::*;
pub use tree::events::*;

pub use error::GroveError;

#[program]
pub mod grove_minter {
    use super::*;

    /// Provision a concurrent merkle tree whose authority is this program
    pub fn provision_tree(
        ctx: Context<ProvisionTree>,
        max_depth: u32,
        max_buffer_size: u32,
        canopy_depth: u32,
    ) -> Result<()> {
        tree::instructions::provision_tree(ctx, max_depth, max_buffer_size, canopy_depth)
    }

    /// Mint one compressed leaf into a provisioned tree, attached to a
    /// verified collection
    pub fn mint_leaf(ctx: Context<MintLeaf>) -> Result<()> {
        leaf::instructions::mint_leaf(ctx)
    }
}
