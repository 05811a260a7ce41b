use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod lifecycle;
pub mod state;
pub mod utils;

use instructions::*;
use state::{AdminStuff, WagerBook};

declare_id!("5mVb3qzkHz3ktyVRHvWTt8sHu4eS1DLUfvtQ9u2GZ2pK");

#[program]
pub mod weight_wagers {
    use super::*;

    /// Create the config and fund the payout vault.
    /// Anyone can answer a fixture scale, so `fixtures_enabled` is meant for
    /// test clusters only; on mainnet it lets any caller farm the pool.
    pub fn initialize(
        ctx: Context<Initialize>,
        oracle_authority: Pubkey,
        initial_pool: u64,
        fixtures_enabled: bool,
    ) -> Result<()> {
        handle_initialize(ctx, oracle_authority, initial_pool, fixtures_enabled)
    }

    /// Emergency stop for new wagers
    pub fn set_stopped(ctx: Context<SetStopped>, stopped: bool) -> Result<()> {
        handle_set_stopped(ctx, stopped)
    }

    pub fn set_reward_multiplier(
        ctx: Context<SetRewardMultiplier>,
        numerator: u64,
        denominator: u64,
    ) -> Result<()> {
        handle_set_reward_multiplier(ctx, numerator, denominator)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        oracle_authority: Option<Pubkey>,
        request_timeout: Option<i64>,
        fixtures_enabled: Option<bool>,
    ) -> Result<()> {
        handle_update_config(ctx, oracle_authority, request_timeout, fixtures_enabled)
    }

    /// Top up the bonus pool
    pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
        handle_fund_pool(ctx, amount)
    }

    /// Owner-only snapshot of the admin switches and pool
    pub fn get_admin_stuff(ctx: Context<GetAdminStuff>) -> Result<AdminStuff> {
        handle_get_admin_stuff(ctx)
    }

    /// Create the caller's wager ledger. It holds at most
    /// `MAX_WAGERS_PER_LEDGER` wagers for its whole lifetime: resolved slots
    /// keep their index and are never reused.
    pub fn open_ledger(ctx: Context<OpenLedger>) -> Result<()> {
        handle_open_ledger(ctx)
    }

    /// Stake lamports on a weight change and request the baseline reading.
    /// Fails with `LedgerFull` once the ledger's lifetime slot cap is reached.
    pub fn create_wager(
        ctx: Context<CreateWager>,
        expiration_duration: i64,
        desired_weight_change: i64,
        scale_id: String,
        stake_amount: u64,
    ) -> Result<()> {
        handle_create_wager(
            ctx,
            expiration_duration,
            desired_weight_change,
            scale_id,
            stake_amount,
        )
    }

    /// Every slot of an account's ledger as parallel columns
    pub fn get_wagers(ctx: Context<GetWagers>) -> Result<WagerBook> {
        handle_get_wagers(ctx)
    }

    /// Request a verification reading for one active wager
    pub fn verify_wager(ctx: Context<VerifyWager>, index: u32) -> Result<()> {
        handle_verify_wager(ctx, index)
    }

    /// Request verification for every active wager of the caller
    pub fn verify_wagers<'info>(
        ctx: Context<'_, '_, 'info, 'info, VerifyWagers<'info>>,
    ) -> Result<()> {
        handle_verify_wagers(ctx)
    }

    /// Oracle delivers a device reading
    pub fn fulfill_reading(
        ctx: Context<DeliverReading>,
        request_id: u64,
        weight: u64,
    ) -> Result<()> {
        handle_fulfill_reading(ctx, request_id, weight)
    }

    /// Answer a fixture scale request
    pub fn fulfill_fixture_reading(ctx: Context<DeliverReading>, request_id: u64) -> Result<()> {
        handle_fulfill_fixture_reading(ctx, request_id)
    }

    /// Re-issue a request that timed out
    pub fn retry_reading(ctx: Context<RetryReading>, index: u32) -> Result<()> {
        handle_retry_reading(ctx, index)
    }

    /// Cancel a wager whose baseline never arrived
    pub fn cancel_wager(ctx: Context<CancelWager>, index: u32) -> Result<()> {
        handle_cancel_wager(ctx, index)
    }
}
