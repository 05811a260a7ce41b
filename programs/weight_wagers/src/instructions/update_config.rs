use anchor_lang::prelude::*;
use crate::constants::SEED_CONFIG;
use crate::errors::WeightWagersError;
use crate::events::ConfigUpdated;
use crate::state::Config;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.is_owner(&owner.key()) @ WeightWagersError::AccessDenied,
    )]
    pub config: Account<'info, Config>,
}

pub fn handle_update_config(
    ctx: Context<UpdateConfig>,
    oracle_authority: Option<Pubkey>,
    request_timeout: Option<i64>,
    fixtures_enabled: Option<bool>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(authority) = oracle_authority {
        config.oracle_authority = authority;
    }

    if let Some(timeout) = request_timeout {
        require!(timeout > 0, WeightWagersError::InvalidRequestTimeout);
        config.request_timeout = timeout;
    }

    if let Some(enabled) = fixtures_enabled {
        config.fixtures_enabled = enabled;
    }

    emit!(ConfigUpdated {
        oracle_authority,
        request_timeout,
        fixtures_enabled,
    });
    msg!("Config updated");
    Ok(())
}
