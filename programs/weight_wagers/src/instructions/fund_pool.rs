use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::{SEED_CONFIG, SEED_VAULT};
use crate::events::PoolFunded;
use crate::state::Config;

#[derive(Accounts)]
pub struct FundPool<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: Validated by seeds
    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = config.vault_bump,
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(PoolFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });
    msg!("Pool funded: {} lamports by {}", amount, ctx.accounts.funder.key());
    Ok(())
}
