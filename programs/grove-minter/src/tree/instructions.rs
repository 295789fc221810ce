use anchor_lang::prelude::*;
use mpl_bubblegum::instructions::CreateTreeConfigCpiBuilder;

use super::contexts::ProvisionTree;
use super::events::TreeProvisioned;
use super::params::{is_supported_shape, is_valid_canopy};
use crate::binding::{self, BindingRole};
use crate::constants::SEED_AUTHORITY;
use crate::error::GroveError;

/// Validate the requested shape, then ask the minting service to
/// initialize the tree with the authority record as its authority.
///
/// The canopy depth is validated but not forwarded: the compression
/// service infers it from the size of the pre-allocated tree account.
pub fn provision_tree(
    ctx: Context<ProvisionTree>,
    max_depth: u32,
    max_buffer_size: u32,
    canopy_depth: u32,
) -> Result<()> {
    require!(
        is_supported_shape(max_depth, max_buffer_size),
        GroveError::UnsupportedTreeShape
    );
    require!(
        is_valid_canopy(max_depth, canopy_depth),
        GroveError::CanopyTooDeep
    );

    let (authority_record, bump) = binding::derive_authority_record(ctx.program_id)?;
    binding::require_bound(
        BindingRole::UpdateAuthority,
        ctx.accounts.authority_record.key,
        &authority_record,
    )?;

    let tree_authority = binding::derive_tree_authority(ctx.accounts.merkle_tree.key);
    binding::require_bound(
        BindingRole::TreeAuthority,
        ctx.accounts.tree_authority.key,
        &tree_authority,
    )?;

    // The minting service records whoever signs as tree creator as the
    // tree's authority; a non-public tree only mints through that signer.
    CreateTreeConfigCpiBuilder::new(&ctx.accounts.bubblegum_program.to_account_info())
        .tree_config(&ctx.accounts.tree_authority.to_account_info())
        .merkle_tree(&ctx.accounts.merkle_tree.to_account_info())
        .payer(&ctx.accounts.payer.to_account_info())
        .tree_creator(&ctx.accounts.authority_record.to_account_info())
        .log_wrapper(&ctx.accounts.log_wrapper.to_account_info())
        .compression_program(&ctx.accounts.compression_program.to_account_info())
        .system_program(&ctx.accounts.system_program.to_account_info())
        .max_depth(max_depth)
        .max_buffer_size(max_buffer_size)
        .public(false)
        .invoke_signed(&[&[SEED_AUTHORITY, &[bump]]])?;

    emit!(TreeProvisioned {
        merkle_tree: ctx.accounts.merkle_tree.key(),
        tree_authority,
        payer: ctx.accounts.payer.key(),
        max_depth,
        max_buffer_size,
    });

    msg!(
        "Tree {} provisioned (depth {}, buffer {}), authority {}",
        ctx.accounts.merkle_tree.key(),
        max_depth,
        max_buffer_size,
        authority_record
    );

    Ok(())
}
