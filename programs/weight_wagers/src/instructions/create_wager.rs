use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::{SEED_CONFIG, SEED_LEDGER, SEED_REQUEST, SEED_VAULT};
use crate::errors::WeightWagersError;
use crate::lifecycle;
use crate::state::{Config, OracleRequest, ScaleId, WagerLedger, WagerTerms};

#[derive(Accounts)]
pub struct CreateWager<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Grows by one slot per wager. Slots are never reused, so an owner can
    /// make at most `MAX_WAGERS_PER_LEDGER` wagers over the ledger's lifetime.
    #[account(
        mut,
        seeds = [SEED_LEDGER, owner.key().as_ref()],
        bump = ledger.bump,
        has_one = owner,
        realloc = WagerLedger::space_for(ledger.wagers.len() + 1),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub ledger: Account<'info, WagerLedger>,

    /// Baseline request for the new slot
    #[account(
        init,
        payer = owner,
        space = OracleRequest::MAX_SIZE,
        seeds = [
            SEED_REQUEST,
            ledger.key().as_ref(),
            &(ledger.wagers.len() as u32).to_le_bytes(),
        ],
        bump,
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

pub fn handle_create_wager(
    ctx: Context<CreateWager>,
    expiration_duration: i64,
    desired_weight_change: i64,
    scale_id: String,
    stake_amount: u64,
) -> Result<()> {
    let scale = ScaleId::parse(&scale_id)?;
    let now = Clock::get()?.unix_timestamp;

    let accounts = &mut *ctx.accounts;
    let ledger_key = accounts.ledger.key();
    let (_, mut transition) = lifecycle::create_wager(
        &mut accounts.config,
        &mut accounts.ledger,
        ledger_key,
        WagerTerms {
            expiration_duration,
            desired_weight_change,
            scale,
            staked_amount: stake_amount,
        },
        now,
    )?;

    // Stake sits in the vault until the slot resolves
    system_program::transfer(
        CpiContext::new(
            accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: accounts.owner.to_account_info(),
                to: accounts.vault.to_account_info(),
            },
        ),
        stake_amount,
    )?;

    let (_, request) = transition
        .open_requests
        .pop()
        .ok_or(WeightWagersError::MissingRequestAccount)?;
    accounts.request.set_inner(request);

    for event in transition.events {
        event.emit();
    }
    Ok(())
}
