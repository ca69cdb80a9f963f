use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ErrorCode;
use crate::events::PassRevoked;

/// Permanently invalidate a pass (authority only)
#[derive(Accounts)]
pub struct RevokePass<'info> {
    #[account(
        mut,
        seeds = [AccessPass::SEED_PREFIX, access_pass.credential_id.to_le_bytes().as_ref()],
        bump = access_pass.bump
    )]
    pub access_pass: Account<'info, AccessPass>,

    #[account(
        seeds = [ProgramConfig::SEED_PREFIX],
        bump = program_config.bump,
        constraint = program_config.is_authority(&authority.key()) @ ErrorCode::Unauthorized
    )]
    pub program_config: Account<'info, ProgramConfig>,

    pub authority: Signer<'info>,
}

pub fn revoke_pass(ctx: Context<RevokePass>) -> Result<()> {
    let access_pass = &mut ctx.accounts.access_pass;

    access_pass.revoke()?;

    emit!(PassRevoked {
        credential_id: access_pass.credential_id,
        tourist_wallet: access_pass.tourist_wallet,
        zone_id: access_pass.zone_id.clone(),
        revoked_by: ctx.accounts.authority.key(),
        revoked_at: Clock::get()?.unix_timestamp,
    });

    msg!("Access pass revoked: ID {}", access_pass.credential_id);

    Ok(())
}
