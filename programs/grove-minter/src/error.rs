use anchor_lang::prelude::*;

#[error_code]
pub enum GroveError {
    // ========== Configuration Errors (6000-6099) ==========
    #[msg("Unsupported (max depth, max buffer size) pair")]
    UnsupportedTreeShape = 6000,
    #[msg("Canopy depth must be strictly less than max depth")]
    CanopyTooDeep = 6001,

    // ========== Binding Mismatch Errors (6100-6199) ==========
    #[msg("Tree authority mismatch")]
    TreeAuthorityMismatch = 6100,
    #[msg("Delegated signer mismatch")]
    DelegatedSignerMismatch = 6101,
    #[msg("Update authority mismatch")]
    UpdateAuthorityMismatch = 6102,

    // ========== Tree Descriptor Errors (6200-6299) ==========
    #[msg("Tree descriptor is not owned by the minting service")]
    TreeDescriptorForeignOwner = 6200,
    #[msg("Tree descriptor could not be deserialized")]
    TreeDescriptorUnreadable = 6201,
    #[msg("Authority record holds no delegation over this tree")]
    TreeNotDelegated = 6202,

    // ========== Derivation Errors (6300-6399) ==========
    #[msg("No valid bump exists for the authority record derivation")]
    AuthorityUnderivable = 6300,
}
