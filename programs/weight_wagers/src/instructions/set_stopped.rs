use anchor_lang::prelude::*;
use crate::constants::SEED_CONFIG;
use crate::errors::WeightWagersError;
use crate::events::StoppedChanged;
use crate::state::Config;

#[derive(Accounts)]
pub struct SetStopped<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.is_owner(&owner.key()) @ WeightWagersError::AccessDenied,
    )]
    pub config: Account<'info, Config>,
}

pub fn handle_set_stopped(ctx: Context<SetStopped>, stopped: bool) -> Result<()> {
    ctx.accounts.config.stopped = stopped;

    emit!(StoppedChanged { stopped });
    msg!("Emergency stop set to {}", stopped);
    Ok(())
}
