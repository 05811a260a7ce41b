use anchor_lang::prelude::*;
use crate::constants::{SEED_CONFIG, SEED_LEDGER, SEED_REQUEST};
use crate::lifecycle;
use crate::state::{Config, OracleRequest, WagerLedger};

#[derive(Accounts)]
#[instruction(index: u32)]
pub struct RetryReading<'info> {
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
    )]
    pub request: Account<'info, OracleRequest>,
}

/// Re-issues a request the oracle never answered. The old id goes stale.
pub fn handle_retry_reading(ctx: Context<RetryReading>, _index: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    let address = accounts.request.key();

    let transition = lifecycle::retry_reading(
        &mut accounts.config,
        &mut accounts.ledger,
        &mut accounts.request,
        address,
        now,
    )?;
    for event in transition.events {
        event.emit();
    }
    Ok(())
}
