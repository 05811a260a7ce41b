use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::{SEED_CONFIG, SEED_VAULT};
use crate::errors::WeightWagersError;
use crate::events::ContractInitialized;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = Config::MAX_SIZE,
        seeds = [SEED_CONFIG],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// The vault PDA that holds stakes and the bonus pool
    /// CHECK: This is a PDA used as a SOL vault, validated by seeds
    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump,
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(
    ctx: Context<Initialize>,
    oracle_authority: Pubkey,
    initial_pool: u64,
    fixtures_enabled: bool,
) -> Result<()> {
    // The vault is a bare system account, it only exists while rent-exempt
    let rent = Rent::get()?;
    require!(
        initial_pool >= rent.minimum_balance(0),
        WeightWagersError::PoolUnderfunded
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        initial_pool,
    )?;

    let config = &mut ctx.accounts.config;
    config.set_inner(Config::new(
        ctx.accounts.owner.key(),
        oracle_authority,
        ctx.bumps.vault,
        ctx.bumps.config,
    ));
    config.fixtures_enabled = fixtures_enabled;

    emit!(ContractInitialized {
        owner: config.owner,
        oracle_authority,
        initial_pool,
    });
    msg!(
        "Contract initialized: owner={}, oracle={}, pool={} lamports",
        config.owner,
        oracle_authority,
        initial_pool
    );
    Ok(())
}
