use anchor_lang::prelude::*;
use crate::constants::{SEED_CONFIG, SEED_LEDGER, SEED_REQUEST, SEED_VAULT};
use crate::lifecycle;
use crate::state::{Config, OracleRequest, WagerLedger};
use crate::utils::payout::pay_from_vault;

#[derive(Accounts)]
#[instruction(index: u32)]
pub struct CancelWager<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_LEDGER, owner.key().as_ref()],
        bump = ledger.bump,
        has_one = owner,
    )]
    pub ledger: Account<'info, WagerLedger>,

    #[account(
        mut,
        seeds = [SEED_REQUEST, ledger.key().as_ref(), &index.to_le_bytes()],
        bump = request.bump,
        has_one = ledger,
        close = owner,
    )]
    pub request: Account<'info, OracleRequest>,

    /// CHECK: Validated by seeds
    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = config.vault_bump,
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Abandons a wager whose baseline never arrived and refunds its stake.
pub fn handle_cancel_wager(ctx: Context<CancelWager>, _index: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let transition = lifecycle::cancel_wager(
        &mut accounts.config,
        &mut accounts.ledger,
        &accounts.request,
        now,
    )?;

    pay_from_vault(
        &accounts.vault.to_account_info(),
        &accounts.owner.to_account_info(),
        &accounts.system_program.to_account_info(),
        accounts.config.vault_bump,
        transition.payout,
    )?;
    for event in transition.events {
        event.emit();
    }
    Ok(())
}
