use anchor_lang::prelude::*;
use crate::constants::{SEED_CONFIG, SEED_LEDGER};
use crate::lifecycle::{self, Transition};
use crate::state::{Config, WagerLedger};
use crate::utils::mailbox::open_request;

#[derive(Accounts)]
pub struct VerifyWager<'info> {
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

    /// Verification request PDA for the slot, created only if the wager has
    /// not already expired
    /// CHECK: Address is checked against the derived PDA before use
    #[account(mut)]
    pub request: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_verify_wager(ctx: Context<VerifyWager>, index: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    let ledger_key = accounts.ledger.key();
    let request = accounts.request.to_account_info();

    let transition = lifecycle::verify(
        &mut accounts.config,
        &mut accounts.ledger,
        ledger_key,
        &[index],
        &[request.key()],
        now,
    )?;
    finish_verification(
        transition,
        &accounts.owner.to_account_info(),
        std::slice::from_ref(&request),
        &accounts.system_program.to_account_info(),
    )
}

/// Opens the requests a verification decided on, pairing each with the
/// supplied account at the same position.
pub(crate) fn finish_verification<'info>(
    transition: Transition,
    payer: &AccountInfo<'info>,
    request_accounts: &[AccountInfo<'info>],
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    for ((_, request), info) in transition.open_requests.iter().zip(request_accounts) {
        open_request(payer, info, system_program, request)?;
    }
    for event in transition.events {
        event.emit();
    }
    Ok(())
}
