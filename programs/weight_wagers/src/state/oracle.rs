use anchor_lang::prelude::*;

use crate::constants::{
    FIXTURE_ALWAYS_200_POUNDS, FIXTURE_LOSES_ALL_WEIGHT_IMMEDIATELY, MAX_SCALE_ID_LEN,
};
use crate::errors::WeightWagersError;

/// Why a reading was requested
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadingIntent {
    /// Starting weight, activates a pending wager
    Baseline,
    /// Current weight, settles a wager under verification
    Verification,
}

/// Simulated scales whose readings are computed on-chain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScaleFixture {
    /// Reports 200 on every reading
    Always200Pounds,
    /// Reports 200 as the baseline, 0 on every verification
    LosesAllWeightImmediately,
}

impl ScaleFixture {
    pub const STARTING_WEIGHT: u64 = 200;

    pub fn reading(&self, intent: ReadingIntent) -> u64 {
        match (self, intent) {
            (ScaleFixture::Always200Pounds, _) => Self::STARTING_WEIGHT,
            (ScaleFixture::LosesAllWeightImmediately, ReadingIntent::Baseline) => {
                Self::STARTING_WEIGHT
            }
            (ScaleFixture::LosesAllWeightImmediately, ReadingIntent::Verification) => 0,
        }
    }
}

/// Which feed the oracle should read from.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub enum ScaleId {
    /// A real smart scale, answered by the oracle authority
    Device(String),
    /// A simulated scale, answered on-chain
    Fixture(ScaleFixture),
}

impl ScaleId {
    /// tag(1) + string(4+32)
    pub const MAX_SIZE: usize = 1 + 4 + MAX_SCALE_ID_LEN;

    /// Parses the free-form identifier a participant submits. The reserved
    /// fixture names never reach the oracle as device ids.
    pub fn parse(raw: &str) -> Result<Self> {
        require!(!raw.is_empty(), WeightWagersError::EmptyScaleId);
        require!(
            raw.len() <= MAX_SCALE_ID_LEN,
            WeightWagersError::ScaleIdTooLong
        );

        Ok(match raw {
            FIXTURE_ALWAYS_200_POUNDS => ScaleId::Fixture(ScaleFixture::Always200Pounds),
            FIXTURE_LOSES_ALL_WEIGHT_IMMEDIATELY => {
                ScaleId::Fixture(ScaleFixture::LosesAllWeightImmediately)
            }
            device => ScaleId::Device(device.to_string()),
        })
    }

    pub fn is_fixture(&self) -> bool {
        matches!(self, ScaleId::Fixture(_))
    }
}

/// An outstanding reading request. One mailbox account per ledger slot; it
/// carries the routing context so the oracle only has to echo the request id.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct OracleRequest {
    /// Correlation id, unique across the program
    pub request_id: u64,
    /// Ledger holding the wager this reading is for
    pub ledger: Pubkey,
    /// Owner of that ledger (receives the rent back on close)
    pub owner: Pubkey,
    /// Slot index inside the ledger
    pub index: u32,
    pub intent: ReadingIntent,
    pub scale: ScaleId,
    /// Unix timestamp of the latest (re)issue
    pub requested_at: i64,
    /// Bump seed for this request PDA
    pub bump: u8,
}

impl OracleRequest {
    /// discriminator(8) + u64(8) + pubkey(32)*2 + u32(4) + intent(1)
    /// + scale(37) + i64(8) + u8(1)
    pub const MAX_SIZE: usize = 8 + 8 + 32 + 32 + 4 + 1 + ScaleId::MAX_SIZE + 8 + 1;

    pub fn timed_out(&self, now: i64, timeout: i64) -> bool {
        now >= self.requested_at.saturating_add(timeout)
    }
}
