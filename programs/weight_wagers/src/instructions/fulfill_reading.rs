use anchor_lang::prelude::*;
use crate::constants::{SEED_CONFIG, SEED_LEDGER, SEED_REQUEST, SEED_VAULT};
use crate::lifecycle;
use crate::state::{Config, OracleRequest, WagerLedger};
use crate::utils::payout::pay_from_vault;

/// Accounts shared by both reading paths
#[derive(Accounts)]
pub struct DeliverReading<'info> {
    pub reporter: Signer<'info>,

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
        seeds = [SEED_REQUEST, ledger.key().as_ref(), &request.index.to_le_bytes()],
        bump = request.bump,
        has_one = ledger,
    )]
    pub request: Account<'info, OracleRequest>,

    /// Receives payouts and the request's rent
    /// CHECK: Bound to the ledger by has_one
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    /// CHECK: Validated by seeds
    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = config.vault_bump,
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Oracle delivers a device reading
pub fn handle_fulfill_reading(
    ctx: Context<DeliverReading>,
    request_id: u64,
    weight: u64,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    lifecycle::authorize_device_reading(
        &accounts.config,
        &accounts.reporter.key(),
        &accounts.request,
    )?;
    deliver(accounts, request_id, weight)
}

/// Anyone may answer a fixture scale, the reading is fixed by the fixture
pub fn handle_fulfill_fixture_reading(
    ctx: Context<DeliverReading>,
    request_id: u64,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let weight = lifecycle::fixture_weight(&accounts.config, &accounts.request)?;
    deliver(accounts, request_id, weight)
}

fn deliver(accounts: &mut DeliverReading, request_id: u64, weight: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let rent_floor = Rent::get()?.minimum_balance(0);
    let vault = accounts.vault.to_account_info();

    let transition = lifecycle::deliver_reading(
        &mut accounts.config,
        &mut accounts.ledger,
        &accounts.request,
        request_id,
        weight,
        now,
        vault.lamports(),
        rent_floor,
    )?;

    if !transition.close_request {
        // Late replies are answered with a no-op so they never fail
        msg!(
            "Ignoring stale reading: id={}, outstanding={}",
            request_id,
            accounts.request.request_id
        );
        return Ok(());
    }

    pay_from_vault(
        &vault,
        &accounts.owner.to_account_info(),
        &accounts.system_program.to_account_info(),
        accounts.config.vault_bump,
        transition.payout,
    )?;
    for event in transition.events {
        event.emit();
    }

    // Consumed; a repeated delivery can no longer resolve this account
    accounts
        .request
        .close(accounts.owner.to_account_info())
}
