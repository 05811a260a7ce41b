use anchor_lang::prelude::*;
use crate::constants::SEED_LEDGER;
use crate::state::{WagerBook, WagerLedger};

#[derive(Accounts)]
pub struct GetWagers<'info> {
    /// CHECK: Any account may be queried, it is only used as a seed
    pub account: UncheckedAccount<'info>,

    /// Absent when the account has never wagered
    #[account(
        seeds = [SEED_LEDGER, account.key().as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Option<Account<'info, WagerLedger>>,
}

pub fn handle_get_wagers(ctx: Context<GetWagers>) -> Result<WagerBook> {
    Ok(ctx
        .accounts
        .ledger
        .as_ref()
        .map(|ledger| ledger.view())
        .unwrap_or_default())
}
