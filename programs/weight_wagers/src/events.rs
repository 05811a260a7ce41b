use anchor_lang::prelude::*;

use crate::state::{ReadingIntent, ScaleId};

#[event]
pub struct ContractInitialized {
    pub owner: Pubkey,
    pub oracle_authority: Pubkey,
    pub initial_pool: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoppedChanged {
    pub stopped: bool,
}

#[event]
pub struct RewardMultiplierChanged {
    pub numerator: u64,
    pub denominator: u64,
}

#[event]
pub struct ConfigUpdated {
    pub oracle_authority: Option<Pubkey>,
    pub request_timeout: Option<i64>,
    pub fixtures_enabled: Option<bool>,
}

#[event]
pub struct PoolFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

/// Picked up by the off-chain oracle; `request` is the mailbox account to answer.
#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadingRequested {
    pub request_id: u64,
    pub request: Pubkey,
    pub owner: Pubkey,
    pub index: u32,
    pub intent: ReadingIntent,
    pub scale: ScaleId,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerCreated {
    pub owner: Pubkey,
    pub index: u32,
    pub amount: u64,
    pub desired_weight_change: i64,
    pub expiration_duration: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerActivated {
    pub owner: Pubkey,
    pub index: u32,
    pub baseline_weight: u64,
    pub expiration_deadline: i64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerBeingVerified {
    pub owner: Pubkey,
    pub index: u32,
    pub request_id: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerVerified {
    pub owner: Pubkey,
    pub index: u32,
    pub amount: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerExpired {
    pub owner: Pubkey,
    pub index: u32,
    pub amount: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerUnchanged {
    pub owner: Pubkey,
    pub index: u32,
    pub current_weight: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WagerCancelled {
    pub owner: Pubkey,
    pub index: u32,
    pub amount: u64,
}

/// A wager notification decided by the lifecycle, emitted by the handler
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WagerEvent {
    ReadingRequested(ReadingRequested),
    Created(WagerCreated),
    Activated(WagerActivated),
    BeingVerified(WagerBeingVerified),
    Verified(WagerVerified),
    Expired(WagerExpired),
    Unchanged(WagerUnchanged),
    Cancelled(WagerCancelled),
}

impl WagerEvent {
    pub fn emit(self) {
        match self {
            WagerEvent::ReadingRequested(e) => {
                msg!(
                    "Reading requested: id={}, owner={}, index={}, intent={:?}",
                    e.request_id,
                    e.owner,
                    e.index,
                    e.intent
                );
                emit!(e);
            }
            WagerEvent::Created(e) => {
                msg!(
                    "Wager created: owner={}, index={}, stake={} lamports, change={}",
                    e.owner,
                    e.index,
                    e.amount,
                    e.desired_weight_change
                );
                emit!(e);
            }
            WagerEvent::Activated(e) => {
                msg!(
                    "Wager activated: owner={}, index={}, baseline={}",
                    e.owner,
                    e.index,
                    e.baseline_weight
                );
                emit!(e);
            }
            WagerEvent::BeingVerified(e) => {
                msg!("Wager being verified: owner={}, index={}", e.owner, e.index);
                emit!(e);
            }
            WagerEvent::Verified(e) => {
                msg!("Wager verified: owner={}, index={}, payout={}", e.owner, e.index, e.amount);
                emit!(e);
            }
            WagerEvent::Expired(e) => {
                msg!("Wager expired: owner={}, index={}, forfeited={}", e.owner, e.index, e.amount);
                emit!(e);
            }
            WagerEvent::Unchanged(e) => {
                msg!(
                    "Wager unchanged: owner={}, index={}, weight={}",
                    e.owner,
                    e.index,
                    e.current_weight
                );
                emit!(e);
            }
            WagerEvent::Cancelled(e) => {
                msg!("Wager cancelled: owner={}, index={}, refunded={}", e.owner, e.index, e.amount);
                emit!(e);
            }
        }
    }
}
