use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_REWARD_DENOMINATOR, DEFAULT_REWARD_NUMERATOR,
};
use crate::errors::WeightWagersError;
use crate::state::ScaleId;
use crate::utils::payout::settlement_amount;

/// Factor applied to a winning stake, kept as an exact ratio.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RewardMultiplier {
    pub numerator: u64,
    pub denominator: u64,
}

impl RewardMultiplier {
    pub const DEFAULT: Self = Self {
        numerator: DEFAULT_REWARD_NUMERATOR,
        denominator: DEFAULT_REWARD_DENOMINATOR,
    };

    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        require!(
            denominator > 0 && numerator >= denominator,
            WeightWagersError::InvalidMultiplier
        );
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn payout_for(&self, stake: u64) -> Result<u64> {
        settlement_amount(stake, self)
    }
}

/// Program-wide configuration and admin switches
#[account]
pub struct Config {
    /// Contract owner, fixed at initialization
    pub owner: Pubkey,
    /// Signer allowed to deliver device readings
    pub oracle_authority: Pubkey,
    /// Emergency stop: blocks new wagers while set
    pub stopped: bool,
    pub reward_multiplier: RewardMultiplier,
    /// Whether fixture scales may be used and answered on-chain. Test
    /// clusters only: any caller can answer a fixture.
    pub fixtures_enabled: bool,
    /// Seconds before an unanswered request may be retried or cancelled
    pub request_timeout: i64,
    /// Next correlation id handed to an oracle request
    pub next_request_id: u64,
    /// Lamports held in the vault on behalf of live wagers
    pub total_staked: u64,
    /// Bump seed for the vault PDA
    pub vault_bump: u8,
    /// Bump seed for this config PDA
    pub bump: u8,
}

/// What `get_admin_stuff` hands back
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct AdminStuff {
    pub stopped: bool,
    pub reward_multiplier: RewardMultiplier,
    pub oracle_authority: Pubkey,
    pub fixtures_enabled: bool,
    pub request_timeout: i64,
    pub total_staked: u64,
    /// Vault lamports free to pay bonuses
    pub pool_balance: u64,
}

impl Config {
    /// discriminator(8) + pubkey(32)*2 + bool(1) + u64(8)*2 + bool(1)
    /// + i64(8) + u64(8)*2 + u8(1)*2
    pub const MAX_SIZE: usize = 8 + 32 + 32 + 1 + 8 + 8 + 1 + 8 + 8 + 8 + 1 + 1;

    pub fn new(owner: Pubkey, oracle_authority: Pubkey, vault_bump: u8, bump: u8) -> Self {
        Self {
            owner,
            oracle_authority,
            stopped: false,
            reward_multiplier: RewardMultiplier::DEFAULT,
            fixtures_enabled: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            next_request_id: 1,
            total_staked: 0,
            vault_bump,
            bump,
        }
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn ensure_accepting_wagers(&self) -> Result<()> {
        require!(!self.stopped, WeightWagersError::ContractStopped);
        Ok(())
    }

    pub fn ensure_scale_allowed(&self, scale: &ScaleId) -> Result<()> {
        if scale.is_fixture() {
            require!(self.fixtures_enabled, WeightWagersError::FixturesDisabled);
        }
        Ok(())
    }

    pub fn issue_request_id(&mut self) -> Result<u64> {
        let id = self.next_request_id;
        self.next_request_id = id
            .checked_add(1)
            .ok_or(WeightWagersError::ArithmeticOverflow)?;
        Ok(id)
    }

    pub fn lock_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(WeightWagersError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release_stake(&mut self, amount: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(WeightWagersError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn admin_stuff(&self, pool_balance: u64) -> AdminStuff {
        AdminStuff {
            stopped: self.stopped,
            reward_multiplier: self.reward_multiplier,
            oracle_authority: self.oracle_authority,
            fixtures_enabled: self.fixtures_enabled,
            request_timeout: self.request_timeout,
            total_staked: self.total_staked,
            pool_balance,
        }
    }
}
