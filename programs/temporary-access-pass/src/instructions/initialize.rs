use anchor_lang::prelude::*;
use crate::state::*;

/// Create the singleton program configuration.
///
/// `init` on the fixed-seed PDA is the duplicate guard: a second call finds
/// the address occupied and the whole transaction is rejected.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = ProgramConfig::SIZE,
        seeds = [ProgramConfig::SEED_PREFIX],
        bump
    )]
    pub program_config: Account<'info, ProgramConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.program_config;

    config.authority = ctx.accounts.authority.key();
    config.credential_counter = 0;
    config.bump = ctx.bumps.program_config;

    msg!("Access pass program initialized with authority: {}", config.authority);

    Ok(())
}
