use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::ErrorCode;
use crate::events::MetadataUpdated;

/// Replace a pass's metadata URI (authority only)
#[derive(Accounts)]
pub struct UpdateMetadata<'info> {
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

pub fn update_metadata(ctx: Context<UpdateMetadata>, new_metadata_uri: String) -> Result<()> {
    let access_pass = &mut ctx.accounts.access_pass;

    access_pass.set_metadata_uri(new_metadata_uri.clone())?;

    emit!(MetadataUpdated {
        credential_id: access_pass.credential_id,
        new_metadata_uri,
        updated_at: Clock::get()?.unix_timestamp,
    });

    msg!("Metadata updated for pass ID {}", access_pass.credential_id);

    Ok(())
}
