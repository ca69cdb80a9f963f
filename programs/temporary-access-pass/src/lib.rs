use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("Axs6dja7sqkyYVdBxYgWBdcpcwgxUTRs7rARkKGor6mq");

#[program]
pub mod temporary_access_pass {
    use super::*;

    // ==================== Administration ====================

    /// Initialize the program configuration with the signer as authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    // ==================== Pass Lifecycle ====================

    /// Mint a soulbound access pass bound to the signing tourist
    pub fn mint_access_pass(
        ctx: Context<MintAccessPass>,
        tourist_id_hash: [u8; 32],
        zone_id: String,
        expiry_timestamp: i64,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::mint::mint_access_pass(
            ctx,
            tourist_id_hash,
            zone_id,
            expiry_timestamp,
            metadata_uri,
        )
    }

    /// Check whether a wallet currently holds valid access to a zone.
    /// Wrong wallet or zone is rejected; revoked or expired passes return false.
    pub fn verify_access(
        ctx: Context<VerifyAccess>,
        tourist_wallet: Pubkey,
        zone_id: String,
    ) -> Result<bool> {
        instructions::verify::verify_access(ctx, tourist_wallet, zone_id)
    }

    /// Update pass metadata (authority only)
    pub fn update_metadata(ctx: Context<UpdateMetadata>, new_metadata_uri: String) -> Result<()> {
        instructions::update_metadata::update_metadata(ctx, new_metadata_uri)
    }

    /// Revoke a pass before or after its natural expiry (authority only)
    pub fn revoke_pass(ctx: Context<RevokePass>) -> Result<()> {
        instructions::revoke::revoke_pass(ctx)
    }
}
