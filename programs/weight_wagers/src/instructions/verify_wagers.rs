use anchor_lang::prelude::*;
use crate::constants::{SEED_CONFIG, SEED_LEDGER};
use crate::lifecycle;
use crate::state::{Config, WagerLedger};
use super::verify_wager::finish_verification;

#[derive(Accounts)]
pub struct VerifyWagers<'info> {
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

    pub system_program: Program<'info, System>,

    // Remaining accounts: one request PDA per Active slot that has not
    // expired, in index order
}

pub fn handle_verify_wagers<'info>(
    ctx: Context<'_, '_, 'info, 'info, VerifyWagers<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    let ledger_key = accounts.ledger.key();
    let supplied: Vec<Pubkey> = ctx.remaining_accounts.iter().map(|a| a.key()).collect();

    let indices = accounts.ledger.active_indices();
    let transition = lifecycle::verify(
        &mut accounts.config,
        &mut accounts.ledger,
        ledger_key,
        &indices,
        &supplied,
        now,
    )?;

    msg!("Verification started for {} active wagers", indices.len());
    finish_verification(
        transition,
        &accounts.owner.to_account_info(),
        ctx.remaining_accounts,
        &accounts.system_program.to_account_info(),
    )
}
