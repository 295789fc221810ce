use anchor_lang::prelude::*;
use mpl_bubblegum::accounts::TreeConfig;
use mpl_bubblegum::instructions::MintToCollectionV1CpiBuilder;
use mpl_bubblegum::types::{
    Collection, Creator, MetadataArgs, TokenProgramVersion, TokenStandard,
};

use super::contexts::MintLeaf;
use super::events::LeafMinted;
use crate::binding::{self, BindingRole};
use crate::constants::SEED_AUTHORITY;
use crate::error::GroveError;

/// Validate every derived account binding, then ask the minting service
/// to append one leaf and verify it against the collection.
///
/// Validation is all-or-nothing: no cross-program call is issued unless
/// every binding holds. CPI failures (tree full, collection rejected)
/// propagate to the caller untouched and are never retried here; retry
/// policy belongs to the caller.
pub fn mint_leaf(ctx: Context<MintLeaf>) -> Result<()> {
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

    let collection_signer = binding::derive_collection_signer();
    binding::require_bound(
        BindingRole::DelegatedSigner,
        ctx.accounts.collection_signer.key,
        &collection_signer,
    )?;

    // The minting service rejects a mint whose signer does not hold the
    // tree; check the recorded authority before issuing the call.
    require_tree_delegation(&ctx.accounts.tree_authority, &authority_record)?;

    let metadata = leaf_metadata_args(
        &ctx.accounts.collection_metadata.name,
        &ctx.accounts.collection_metadata.symbol,
        &ctx.accounts.collection_metadata.uri,
        ctx.accounts.collection_mint.key(),
        authority_record,
    );

    MintToCollectionV1CpiBuilder::new(&ctx.accounts.bubblegum_program.to_account_info())
        .tree_config(&ctx.accounts.tree_authority.to_account_info())
        .leaf_owner(&ctx.accounts.payer.to_account_info())
        .leaf_delegate(&ctx.accounts.payer.to_account_info())
        .merkle_tree(&ctx.accounts.merkle_tree.to_account_info())
        .payer(&ctx.accounts.payer.to_account_info())
        .tree_creator_or_delegate(&ctx.accounts.authority_record.to_account_info())
        .collection_authority(&ctx.accounts.authority_record.to_account_info())
        .collection_authority_record_pda(None)
        .collection_mint(&ctx.accounts.collection_mint.to_account_info())
        .collection_metadata(&ctx.accounts.collection_metadata.to_account_info())
        .collection_edition(&ctx.accounts.collection_edition.to_account_info())
        .bubblegum_signer(&ctx.accounts.collection_signer.to_account_info())
        .log_wrapper(&ctx.accounts.log_wrapper.to_account_info())
        .compression_program(&ctx.accounts.compression_program.to_account_info())
        .token_metadata_program(&ctx.accounts.token_metadata_program.to_account_info())
        .system_program(&ctx.accounts.system_program.to_account_info())
        .metadata(metadata)
        .invoke_signed(&[&[SEED_AUTHORITY, &[bump]]])?;

    emit!(LeafMinted {
        merkle_tree: ctx.accounts.merkle_tree.key(),
        leaf_owner: ctx.accounts.payer.key(),
        collection_mint: ctx.accounts.collection_mint.key(),
    });

    msg!(
        "Leaf minted into tree {} for {}",
        ctx.accounts.merkle_tree.key(),
        ctx.accounts.payer.key()
    );

    Ok(())
}

/// Check the tree descriptor's recorded authority against the authority
/// record before committing to the CPI
fn require_tree_delegation(
    tree_authority_info: &AccountInfo,
    authority_record: &Pubkey,
) -> Result<()> {
    require!(
        *tree_authority_info.owner == mpl_bubblegum::ID,
        GroveError::TreeDescriptorForeignOwner
    );

    let data = tree_authority_info.try_borrow_data()?;
    let config =
        TreeConfig::from_bytes(&data).map_err(|_| GroveError::TreeDescriptorUnreadable)?;

    require!(
        binding::tree_accepts_authority(
            &config.tree_creator,
            &config.tree_delegate,
            authority_record
        ),
        GroveError::TreeNotDelegated
    );

    Ok(())
}

/// Build the leaf's metadata from the collection it is minted into.
///
/// On-chain metadata strings are fixed-width and right-padded with NULs;
/// the padding must not leak into the leaf hash.
fn leaf_metadata_args(
    name: &str,
    symbol: &str,
    uri: &str,
    collection_mint: Pubkey,
    creator: Pubkey,
) -> MetadataArgs {
    MetadataArgs {
        name: trimmed(name),
        symbol: trimmed(symbol),
        uri: trimmed(uri),
        seller_fee_basis_points: 0,
        primary_sale_happened: true,
        is_mutable: true,
        edition_nonce: None,
        token_standard: Some(TokenStandard::NonFungible),
        // verified=false in the args; the minting service flips it after
        // checking the collection accounts against each other
        collection: Some(Collection {
            verified: false,
            key: collection_mint,
        }),
        uses: None,
        token_program_version: TokenProgramVersion::Original,
        creators: vec![Creator {
            address: creator,
            verified: true,
            share: 100,
        }],
    }
}

fn trimmed(raw: &str) -> String {
    raw.trim_end_matches('\0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_strings_lose_their_padding() {
        assert_eq!(trimmed("Kombi\0\0\0"), "Kombi");
        assert_eq!(trimmed("plain"), "plain");
        assert_eq!(trimmed(""), "");
    }

    #[test]
    fn leaf_metadata_binds_collection_and_creator() {
        let collection_mint = Pubkey::new_unique();
        let creator = Pubkey::new_unique();

        let args = leaf_metadata_args(
            "Kombi\0\0\0",
            "KMB\0",
            "https://example.com/metadata.json",
            collection_mint,
            creator,
        );

        assert_eq!(args.name, "Kombi");
        assert_eq!(args.symbol, "KMB");

        let collection = args.collection.expect("collection is always attached");
        assert_eq!(collection.key, collection_mint);
        assert!(!collection.verified);

        assert_eq!(args.creators.len(), 1);
        assert_eq!(args.creators[0].address, creator);
        assert!(args.creators[0].verified);
        assert_eq!(args.creators[0].share, 100);
    }
}
