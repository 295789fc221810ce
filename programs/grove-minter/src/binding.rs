//! Account binding validation.
//!
//! Every externally-derived address the handlers rely on is recomputed
//! here on each call and compared against what the caller supplied. On
//! mismatch the check fails with an error naming the role that failed.
//! The claimed account is never replaced with the recomputed one: the
//! claimed account is what the cross-program call would actually use.

use anchor_lang::prelude::*;

use crate::constants::{SEED_AUTHORITY, SEED_COLLECTION_CPI};
use crate::error::GroveError;

/// Role a claimed account is bound to. Selects the error reported on
/// mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingRole {
    /// Per-tree authority PDA stored by the minting service
    TreeAuthority,
    /// Fixed-label signer the minting service expects for collection writes
    DelegatedSigner,
    /// This program's own authority record
    UpdateAuthority,
}

impl BindingRole {
    pub fn error(self) -> GroveError {
        match self {
            BindingRole::TreeAuthority => GroveError::TreeAuthorityMismatch,
            BindingRole::DelegatedSigner => GroveError::DelegatedSignerMismatch,
            BindingRole::UpdateAuthority => GroveError::UpdateAuthorityMismatch,
        }
    }
}

/// Derive the authority record address and bump for `program_id`.
///
/// Pure function of the fixed seed label and the program identity.
/// Recomputed on every call, never cached in an account.
pub fn derive_authority_record(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[SEED_AUTHORITY], program_id)
        .ok_or_else(|| GroveError::AuthorityUnderivable.into())
}

/// Derive the tree authority PDA the minting service stores for
/// `merkle_tree`. Pure function of the tree address alone.
pub fn derive_tree_authority(merkle_tree: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &mpl_bubblegum::ID).0
}

/// Derive the fixed-label collection-CPI signer of the minting service.
pub fn derive_collection_signer() -> Pubkey {
    Pubkey::find_program_address(&[SEED_COLLECTION_CPI], &mpl_bubblegum::ID).0
}

/// Require `claimed` to equal the canonical `expected` address for `role`.
pub fn require_bound(role: BindingRole, claimed: &Pubkey, expected: &Pubkey) -> Result<()> {
    if claimed != expected {
        msg!(
            "Binding mismatch for {:?}: claimed {}, expected {}",
            role,
            claimed,
            expected
        );
        return Err(role.error().into());
    }
    Ok(())
}

/// Whether a tree descriptor with the given creator and delegate accepts
/// `authority` as its update authority.
pub fn tree_accepts_authority(
    tree_creator: &Pubkey,
    tree_delegate: &Pubkey,
    authority: &Pubkey,
) -> bool {
    tree_creator == authority || tree_delegate == authority
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(_) => panic!("expected a typed error"),
        }
    }

    #[test]
    fn authority_record_derivation_is_idempotent() {
        let first = derive_authority_record(&crate::ID).unwrap();
        let second = derive_authority_record(&crate::ID).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn authority_record_depends_on_program_identity() {
        let ours = derive_authority_record(&crate::ID).unwrap();
        let theirs = derive_authority_record(&mpl_bubblegum::ID).unwrap();
        assert_ne!(ours.0, theirs.0);
    }

    #[test]
    fn tree_authority_is_a_pure_function_of_the_tree() {
        let tree = Pubkey::new_unique();
        assert_eq!(derive_tree_authority(&tree), derive_tree_authority(&tree));

        let other = Pubkey::new_unique();
        assert_ne!(derive_tree_authority(&tree), derive_tree_authority(&other));
    }

    #[test]
    fn collection_signer_matches_manual_derivation() {
        let expected =
            Pubkey::find_program_address(&[b"collection_cpi"], &mpl_bubblegum::ID).0;
        assert_eq!(derive_collection_signer(), expected);
    }

    #[test]
    fn bound_accounts_pass() {
        let key = Pubkey::new_unique();
        assert!(require_bound(BindingRole::TreeAuthority, &key, &key).is_ok());
    }

    #[test]
    fn mismatches_name_the_failed_role() {
        let claimed = Pubkey::new_unique();
        let expected = Pubkey::new_unique();

        let err = require_bound(BindingRole::TreeAuthority, &claimed, &expected).unwrap_err();
        assert_eq!(code(err), u32::from(GroveError::TreeAuthorityMismatch));

        let err = require_bound(BindingRole::DelegatedSigner, &claimed, &expected).unwrap_err();
        assert_eq!(code(err), u32::from(GroveError::DelegatedSignerMismatch));

        let err = require_bound(BindingRole::UpdateAuthority, &claimed, &expected).unwrap_err();
        assert_eq!(code(err), u32::from(GroveError::UpdateAuthorityMismatch));
    }

    #[test]
    fn creator_and_delegate_both_hold_the_tree() {
        let authority = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();

        assert!(tree_accepts_authority(&authority, &stranger, &authority));
        assert!(tree_accepts_authority(&stranger, &authority, &authority));
        assert!(!tree_accepts_authority(&stranger, &stranger, &authority));
    }
}
