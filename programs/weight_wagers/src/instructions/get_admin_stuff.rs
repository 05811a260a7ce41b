use anchor_lang::prelude::*;
use crate::constants::{SEED_CONFIG, SEED_VAULT};
use crate::errors::WeightWagersError;
use crate::state::{AdminStuff, Config};
use crate::utils::payout::pool_balance;

#[derive(Accounts)]
pub struct GetAdminStuff<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.is_owner(&owner.key()) @ WeightWagersError::AccessDenied,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Validated by seeds, only its balance is read
    #[account(
        seeds = [SEED_VAULT],
        bump = config.vault_bump,
    )]
    pub vault: UncheckedAccount<'info>,
}

pub fn handle_get_admin_stuff(ctx: Context<GetAdminStuff>) -> Result<AdminStuff> {
    let config = &ctx.accounts.config;
    let rent_floor = Rent::get()?.minimum_balance(0);
    let pool = pool_balance(
        ctx.accounts.vault.lamports(),
        rent_floor,
        config.total_staked,
    );
    Ok(config.admin_stuff(pool))
}
