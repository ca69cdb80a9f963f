use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ErrorCode;
use crate::events::AccessVerified;

/// Read-only access check. No account is writable.
#[derive(Accounts)]
#[instruction(tourist_wallet: Pubkey, zone_id: String)]
pub struct VerifyAccess<'info> {
    #[account(
        seeds = [AccessPass::SEED_PREFIX, access_pass.credential_id.to_le_bytes().as_ref()],
        bump = access_pass.bump,
        constraint = access_pass.tourist_wallet == tourist_wallet @ ErrorCode::WrongTourist,
        constraint = access_pass.zone_id == zone_id @ ErrorCode::ZoneMismatch
    )]
    pub access_pass: Account<'info, AccessPass>,
}

pub fn verify_access(
    ctx: Context<VerifyAccess>,
    tourist_wallet: Pubkey,
    zone_id: String,
) -> Result<bool> {
    let access_pass = &ctx.accounts.access_pass;
    let current_time = Clock::get()?.unix_timestamp;

    let is_valid = access_pass.verify(&tourist_wallet, &zone_id, current_time)?;

    emit!(AccessVerified {
        credential_id: access_pass.credential_id,
        tourist_wallet,
        zone_id: zone_id.clone(),
        is_valid,
        verified_at: current_time,
    });

    msg!("Access verification for zone {}: {}", zone_id, is_valid);

    Ok(is_valid)
}
