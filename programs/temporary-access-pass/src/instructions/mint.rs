use anchor_lang::prelude::*;
use crate::state::*;
use crate::events::AccessPassMinted;

/// Mint a soulbound access pass for the signing tourist
#[derive(Accounts)]
pub struct MintAccessPass<'info> {
    #[account(
        mut,
        seeds = [ProgramConfig::SEED_PREFIX],
        bump = program_config.bump
    )]
    pub program_config: Account<'info, ProgramConfig>,

    #[account(
        init,
        payer = tourist,
        space = AccessPass::SIZE,
        seeds = [
            AccessPass::SEED_PREFIX,
            program_config.credential_counter.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub access_pass: Account<'info, AccessPass>,

    #[account(mut)]
    pub tourist: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn mint_access_pass(
    ctx: Context<MintAccessPass>,
    tourist_id_hash: [u8; 32],
    zone_id: String,
    expiry_timestamp: i64,
    metadata_uri: String,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    AccessPass::validate_mint(&zone_id, expiry_timestamp, &metadata_uri, current_time)?;

    // The pass address was derived from the pre-increment counter, so the
    // claimed id always matches the seed.
    let credential_id = ctx.accounts.program_config.claim_credential_id()?;
    let tourist_wallet = ctx.accounts.tourist.key();

    ctx.accounts.access_pass.set_inner(AccessPass::new(
        credential_id,
        tourist_id_hash,
        zone_id.clone(),
        expiry_timestamp,
        tourist_wallet,
        metadata_uri.clone(),
        current_time,
        ctx.bumps.access_pass,
    ));

    emit!(AccessPassMinted {
        credential_id,
        tourist_wallet,
        tourist_id_hash,
        zone_id,
        expiry_timestamp,
        metadata_uri,
        minted_at: current_time,
    });

    msg!("Access pass minted: ID {} for {}", credential_id, tourist_wallet);

    Ok(())
}
