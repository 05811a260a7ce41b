use anchor_lang::prelude::*;
use crate::constants::SEED_CONFIG;
use crate::errors::WeightWagersError;
use crate::events::RewardMultiplierChanged;
use crate::state::{Config, RewardMultiplier};

#[derive(Accounts)]
pub struct SetRewardMultiplier<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.is_owner(&owner.key()) @ WeightWagersError::AccessDenied,
    )]
    pub config: Account<'info, Config>,
}

pub fn handle_set_reward_multiplier(
    ctx: Context<SetRewardMultiplier>,
    numerator: u64,
    denominator: u64,
) -> Result<()> {
    ctx.accounts.config.reward_multiplier = RewardMultiplier::new(numerator, denominator)?;

    emit!(RewardMultiplierChanged {
        numerator,
        denominator,
    });
    msg!("Reward multiplier set to {}/{}", numerator, denominator);
    Ok(())
}
