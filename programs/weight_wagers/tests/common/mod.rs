//! In-process stand-in for the cluster: one config, one ledger, the vault
//! balance, the per-slot request mailbox and the program's event log. Every
//! operation runs the program's lifecycle functions and applies the returned
//! transition the way the instruction does.
#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use weight_wagers::events::WagerEvent;
use weight_wagers::lifecycle::{self, Transition};
use weight_wagers::state::{Config, OracleRequest, ScaleId, WagerLedger, WagerTerms};
use weight_wagers::utils::payout::pool_balance;

/// Rent-exempt minimum of a zero-data account
pub const RENT_FLOOR: u64 = 890_880;

pub fn error_name(err: anchor_lang::error::Error) -> String {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_name.clone(),
        other => other.to_string(),
    }
}

pub fn event_names(events: &[WagerEvent]) -> Vec<&'static str> {
    events
        .iter()
        .map(|event| match event {
            WagerEvent::ReadingRequested(_) => "ReadingRequested",
            WagerEvent::Created(_) => "WagerCreated",
            WagerEvent::Activated(_) => "WagerActivated",
            WagerEvent::BeingVerified(_) => "WagerBeingVerified",
            WagerEvent::Verified(_) => "WagerVerified",
            WagerEvent::Expired(_) => "WagerExpired",
            WagerEvent::Unchanged(_) => "WagerUnchanged",
            WagerEvent::Cancelled(_) => "WagerCancelled",
        })
        .collect()
}

#[derive(Clone)]
pub struct Chain {
    pub config: Config,
    pub ledger_key: Pubkey,
    pub ledger: WagerLedger,
    pub mailbox: BTreeMap<u32, (Pubkey, OracleRequest)>,
    pub vault: u64,
    /// Lamports the owner received back from the vault
    pub credited: u64,
    pub events: Vec<WagerEvent>,
    pub now: i64,
}

impl Chain {
    /// A test cluster deployment, fixtures on
    pub fn new(pool: u64) -> Self {
        let owner = Pubkey::new_unique();
        let mut config = Config::new(owner, Pubkey::new_unique(), 254, 255);
        config.fixtures_enabled = true;
        Self {
            config,
            ledger_key: Pubkey::new_unique(),
            ledger: WagerLedger::new(owner, 253),
            mailbox: BTreeMap::new(),
            vault: RENT_FLOOR + pool,
            credited: 0,
            events: Vec::new(),
            now: 1_700_000_000,
        }
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    pub fn pool(&self) -> u64 {
        pool_balance(self.vault, RENT_FLOOR, self.config.total_staked)
    }

    pub fn request_address(&self, index: u32) -> Pubkey {
        lifecycle::request_address(&self.ledger_key, index).0
    }

    /// Drains the event log
    pub fn take_events(&mut self) -> Vec<WagerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Runs `op` atomically: on error every account is left as it was.
    fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let before = self.clone();
        let result = op(self);
        if result.is_err() {
            *self = before;
        }
        result
    }

    /// Opens and closes request accounts, pays out and logs events.
    fn apply(&mut self, transition: Transition, answered: Option<u32>) {
        if transition.close_request {
            if let Some(index) = answered {
                self.mailbox.remove(&index);
            }
        }
        for (address, request) in transition.open_requests {
            let previous = self.mailbox.insert(request.index, (address, request));
            assert!(previous.is_none(), "request account already open");
        }
        self.vault -= transition.payout;
        self.credited += transition.payout;
        self.events.extend(transition.events);
    }

    pub fn create(
        &mut self,
        expiration_duration: i64,
        desired_weight_change: i64,
        scale_id: &str,
        stake: u64,
    ) -> Result<u32> {
        self.transact(|chain| {
            let terms = WagerTerms {
                expiration_duration,
                desired_weight_change,
                scale: ScaleId::parse(scale_id)?,
                staked_amount: stake,
            };
            let (index, transition) = lifecycle::create_wager(
                &mut chain.config,
                &mut chain.ledger,
                chain.ledger_key,
                terms,
                chain.now,
            )?;
            chain.vault += stake;
            chain.apply(transition, None);
            Ok(index)
        })
    }

    pub fn verify(&mut self, index: u32) -> Result<()> {
        let address = self.request_address(index);
        self.verify_with(&[index], &[address])
    }

    /// Bulk verification with the request accounts a client would derive
    pub fn verify_all(&mut self) -> Result<()> {
        let supplied: Vec<Pubkey> = self
            .ledger
            .active_indices()
            .into_iter()
            .filter(|&index| {
                self.ledger
                    .slot(index)
                    .map(|slot| !slot.is_expired(self.now))
                    .unwrap_or(false)
            })
            .map(|index| self.request_address(index))
            .collect();
        self.verify_all_with(&supplied)
    }

    pub fn verify_all_with(&mut self, supplied: &[Pubkey]) -> Result<()> {
        let indices = self.ledger.active_indices();
        self.verify_with(&indices, supplied)
    }

    fn verify_with(&mut self, indices: &[u32], supplied: &[Pubkey]) -> Result<()> {
        self.transact(|chain| {
            let transition = lifecycle::verify(
                &mut chain.config,
                &mut chain.ledger,
                chain.ledger_key,
                indices,
                supplied,
                chain.now,
            )?;
            chain.apply(transition, None);
            Ok(())
        })
    }

    /// `fulfill_reading` signed by `reporter`
    pub fn deliver_as(
        &mut self,
        reporter: Pubkey,
        index: u32,
        request_id: u64,
        weight: u64,
    ) -> Result<()> {
        let request = self.request(index)?;
        lifecycle::authorize_device_reading(&self.config, &reporter, &request)?;
        self.settle(request, request_id, weight)
    }

    /// `fulfill_reading` signed by the oracle authority
    pub fn deliver(&mut self, index: u32, request_id: u64, weight: u64) -> Result<()> {
        let oracle = self.config.oracle_authority;
        self.deliver_as(oracle, index, request_id, weight)
    }

    /// `fulfill_fixture_reading` for the slot's outstanding request
    pub fn deliver_fixture(&mut self, index: u32) -> Result<()> {
        let request = self.request(index)?;
        let weight = lifecycle::fixture_weight(&self.config, &request)?;
        let request_id = request.request_id;
        self.settle(request, request_id, weight)
    }

    pub fn retry(&mut self, index: u32) -> Result<u64> {
        self.transact(|chain| {
            let (address, mut request) = chain
                .mailbox
                .remove(&index)
                .ok_or(ErrorCode::AccountNotInitialized)?;
            let transition = lifecycle::retry_reading(
                &mut chain.config,
                &mut chain.ledger,
                &mut request,
                address,
                chain.now,
            )?;
            let request_id = request.request_id;
            chain.mailbox.insert(index, (address, request));
            chain.apply(transition, None);
            Ok(request_id)
        })
    }

    pub fn cancel(&mut self, index: u32) -> Result<()> {
        let request = self.request(index)?;
        self.transact(|chain| {
            let transition =
                lifecycle::cancel_wager(&mut chain.config, &mut chain.ledger, &request, chain.now)?;
            chain.apply(transition, Some(index));
            Ok(())
        })
    }

    pub fn request(&self, index: u32) -> Result<OracleRequest> {
        self.mailbox
            .get(&index)
            .map(|(_, request)| request.clone())
            .ok_or_else(|| ErrorCode::AccountNotInitialized.into())
    }

    fn settle(&mut self, request: OracleRequest, request_id: u64, weight: u64) -> Result<()> {
        self.transact(|chain| {
            let transition = lifecycle::deliver_reading(
                &mut chain.config,
                &mut chain.ledger,
                &request,
                request_id,
                weight,
                chain.now,
                chain.vault,
                RENT_FLOOR,
            )?;
            chain.apply(transition, Some(request.index));
            Ok(())
        })
    }
}
