use anchor_lang::prelude::*;

use crate::constants::MAX_WAGERS_PER_LEDGER;
use crate::errors::WeightWagersError;
use crate::state::{Config, ReadingIntent, ScaleId};

/// Lifecycle state of a ledger slot. `Resolved` is the zero value: a settled,
/// expired or cancelled slot is reset in place, never removed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WagerState {
    #[default]
    Resolved,
    /// Waiting for the baseline reading
    Pending,
    /// Baseline captured, can be verified
    Active,
    /// Waiting for the verification reading
    BeingVerified,
}

/// A single wager, addressed by its position in the owner's ledger
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Wager {
    /// Unix timestamp after which the wager can only expire (0 until active)
    pub expiration_deadline: i64,
    /// Requested duration, applied when the baseline arrives
    pub expiration_duration: i64,
    /// Positive = pounds to lose, negative = pounds to gain
    pub desired_weight_change: i64,
    /// Lamports staked at creation
    pub staked_amount: u64,
    /// Reading captured at activation
    pub baseline_weight: u64,
    pub scale: Option<ScaleId>,
    pub state: WagerState,
    /// Correlation id of the outstanding oracle request (0 = none)
    pub pending_request: u64,
}

impl Wager {
    /// i64(8)*3 + u64(8)*2 + option(1) + scale + state(1) + u64(8)
    pub const MAX_SIZE: usize = 8 * 3 + 8 * 2 + 1 + ScaleId::MAX_SIZE + 1 + 8;

    pub fn is_live(&self) -> bool {
        self.state != WagerState::Resolved
    }

    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.state, WagerState::Active | WagerState::BeingVerified)
            && now > self.expiration_deadline
    }

    pub fn target_met(&self, current_weight: u64) -> bool {
        let baseline = self.baseline_weight as i128;
        let current = current_weight as i128;
        let desired = self.desired_weight_change as i128;
        if desired > 0 {
            baseline - current >= desired
        } else {
            current - baseline >= -desired
        }
    }

    /// Expiry wins over a met target.
    fn verdict(&self, now: i64, current_weight: u64) -> Verdict {
        if self.is_expired(now) {
            Verdict::Expired
        } else if self.target_met(current_weight) {
            Verdict::Met
        } else {
            Verdict::Unmet
        }
    }
}

enum Verdict {
    Expired,
    Met,
    Unmet,
}

/// Creation arguments for a new slot
#[derive(Clone, Debug)]
pub struct WagerTerms {
    pub expiration_duration: i64,
    pub desired_weight_change: i64,
    pub scale: ScaleId,
    pub staked_amount: u64,
}

/// Result of feeding an oracle reading to a slot
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadingOutcome {
    /// Stale, duplicate or out-of-state delivery; nothing changed
    Ignored,
    Activated {
        baseline_weight: u64,
        expiration_deadline: i64,
    },
    /// Slot resolved; `payout` is owed to the owner
    Verified { stake: u64, payout: u64 },
    /// Slot resolved; stake forfeited to the pool
    Expired { stake: u64 },
    /// Target not met yet; slot is Active again
    Unchanged { current_weight: u64 },
}

/// Result of asking to verify an active slot
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VerificationStart {
    Requested { request_id: u64 },
    /// Deadline already passed, resolved without asking the oracle
    Expired { stake: u64 },
}

/// Parallel columns returned by `get_wagers`, one entry per slot ever created
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct WagerBook {
    pub expirations: Vec<i64>,
    pub desired_changes: Vec<i64>,
    pub amounts: Vec<u64>,
    pub baselines: Vec<u64>,
}

/// Every wager an account has ever made, in creation order
#[account]
pub struct WagerLedger {
    pub owner: Pubkey,
    pub wagers: Vec<Wager>,
    /// Bump seed for this ledger PDA
    pub bump: u8,
}

impl WagerLedger {
    /// discriminator(8) + pubkey(32) + vec(4 + n * slot) + u8(1)
    pub fn space_for(slots: usize) -> usize {
        8 + 32 + 4 + slots * Wager::MAX_SIZE + 1
    }

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            wagers: Vec::new(),
            bump,
        }
    }

    pub fn slot(&self, index: u32) -> Result<&Wager> {
        self.wagers
            .get(index as usize)
            .ok_or_else(|| error!(WeightWagersError::InvalidIndex))
    }

    fn live_slot_mut(&mut self, index: u32) -> Result<&mut Wager> {
        let slot = self
            .wagers
            .get_mut(index as usize)
            .ok_or_else(|| error!(WeightWagersError::InvalidIndex))?;
        require!(slot.is_live(), WeightWagersError::InvalidIndex);
        Ok(slot)
    }

    pub fn live_count(&self) -> usize {
        self.wagers.iter().filter(|w| w.is_live()).count()
    }

    pub fn active_indices(&self) -> Vec<u32> {
        self.wagers
            .iter()
            .enumerate()
            .filter(|(_, w)| w.state == WagerState::Active)
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Appends a Pending slot and issues its baseline request id.
    pub fn create_slot(&mut self, config: &mut Config, terms: WagerTerms) -> Result<u32> {
        config.ensure_accepting_wagers()?;
        require!(terms.staked_amount > 0, WeightWagersError::ZeroStake);
        require!(
            terms.expiration_duration > 0,
            WeightWagersError::InvalidDuration
        );
        require!(
            terms.desired_weight_change != 0,
            WeightWagersError::ZeroWeightChange
        );
        config.ensure_scale_allowed(&terms.scale)?;
        require!(
            self.wagers.len() < MAX_WAGERS_PER_LEDGER,
            WeightWagersError::LedgerFull
        );

        let index = self.wagers.len() as u32;
        config.lock_stake(terms.staked_amount)?;
        let request_id = config.issue_request_id()?;

        self.wagers.push(Wager {
            expiration_deadline: 0,
            expiration_duration: terms.expiration_duration,
            desired_weight_change: terms.desired_weight_change,
            staked_amount: terms.staked_amount,
            baseline_weight: 0,
            scale: Some(terms.scale),
            state: WagerState::Pending,
            pending_request: request_id,
        });
        Ok(index)
    }

    /// Resets a live slot to the zero value and releases its stake.
    pub fn resolve_slot(&mut self, config: &mut Config, index: u32) -> Result<u64> {
        let slot = self.live_slot_mut(index)?;
        let stake = slot.staked_amount;
        *slot = Wager::default();
        config.release_stake(stake)?;
        Ok(stake)
    }

    pub fn begin_verification(
        &mut self,
        config: &mut Config,
        index: u32,
        now: i64,
    ) -> Result<VerificationStart> {
        let expired = {
            let slot = self.live_slot_mut(index)?;
            require!(
                slot.state == WagerState::Active,
                WeightWagersError::WagerNotActive
            );
            slot.is_expired(now)
        };

        if expired {
            let stake = self.resolve_slot(config, index)?;
            return Ok(VerificationStart::Expired { stake });
        }

        let request_id = config.issue_request_id()?;
        let slot = self.live_slot_mut(index)?;
        slot.state = WagerState::BeingVerified;
        slot.pending_request = request_id;
        Ok(VerificationStart::Requested { request_id })
    }

    /// Routes an oracle reading to its slot. Only a reading whose id matches
    /// the outstanding request and whose intent matches the slot state is
    /// honored; anything else is ignored.
    pub fn apply_reading(
        &mut self,
        config: &mut Config,
        index: u32,
        request_id: u64,
        intent: ReadingIntent,
        now: i64,
        weight: u64,
    ) -> Result<ReadingOutcome> {
        let slot = self
            .wagers
            .get_mut(index as usize)
            .ok_or_else(|| error!(WeightWagersError::InvalidIndex))?;
        if request_id == 0 || slot.pending_request != request_id {
            return Ok(ReadingOutcome::Ignored);
        }

        match (intent, slot.state) {
            (ReadingIntent::Baseline, WagerState::Pending) => {
                let expiration_deadline = now
                    .checked_add(slot.expiration_duration)
                    .ok_or(WeightWagersError::ArithmeticOverflow)?;
                slot.baseline_weight = weight;
                slot.expiration_deadline = expiration_deadline;
                slot.state = WagerState::Active;
                slot.pending_request = 0;
                Ok(ReadingOutcome::Activated {
                    baseline_weight: weight,
                    expiration_deadline,
                })
            }
            (ReadingIntent::Verification, WagerState::BeingVerified) => {
                match slot.verdict(now, weight) {
                    Verdict::Expired => {
                        let stake = self.resolve_slot(config, index)?;
                        Ok(ReadingOutcome::Expired { stake })
                    }
                    Verdict::Met => {
                        let payout = config.reward_multiplier.payout_for(slot.staked_amount)?;
                        let stake = self.resolve_slot(config, index)?;
                        Ok(ReadingOutcome::Verified { stake, payout })
                    }
                    Verdict::Unmet => {
                        slot.state = WagerState::Active;
                        slot.pending_request = 0;
                        Ok(ReadingOutcome::Unchanged {
                            current_weight: weight,
                        })
                    }
                }
            }
            _ => Ok(ReadingOutcome::Ignored),
        }
    }

    /// Gives the outstanding request of a Pending or BeingVerified slot a new
    /// id; the old one goes stale.
    pub fn reissue_request(&mut self, config: &mut Config, index: u32) -> Result<u64> {
        {
            let slot = self.live_slot_mut(index)?;
            require!(
                matches!(
                    slot.state,
                    WagerState::Pending | WagerState::BeingVerified
                ),
                WeightWagersError::NoOutstandingRequest
            );
        }
        let request_id = config.issue_request_id()?;
        self.live_slot_mut(index)?.pending_request = request_id;
        Ok(request_id)
    }

    /// Abandons a slot whose baseline never arrived. Returns the stake to refund.
    pub fn cancel_pending(&mut self, config: &mut Config, index: u32) -> Result<u64> {
        require!(
            self.live_slot_mut(index)?.state == WagerState::Pending,
            WeightWagersError::WagerNotPending
        );
        self.resolve_slot(config, index)
    }

    pub fn view(&self) -> WagerBook {
        let mut book = WagerBook::default();
        for wager in &self.wagers {
            book.expirations.push(wager.expiration_deadline);
            book.desired_changes.push(wager.desired_weight_change);
            book.amounts.push(wager.staked_amount);
            book.baselines.push(wager.baseline_weight);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::error_name;
    use crate::state::ScaleFixture;

    fn config() -> Config {
        let mut cfg = Config::new(Pubkey::new_unique(), Pubkey::new_unique(), 254, 255);
        cfg.fixtures_enabled = true;
        cfg
    }

    fn terms(duration: i64, change: i64, stake: u64) -> WagerTerms {
        WagerTerms {
            expiration_duration: duration,
            desired_weight_change: change,
            scale: ScaleId::Fixture(ScaleFixture::Always200Pounds),
            staked_amount: stake,
        }
    }

    fn active_slot(ledger: &mut WagerLedger, cfg: &mut Config, baseline: u64, now: i64) -> u32 {
        let index = ledger.create_slot(cfg, terms(1_000, 20, 23_456)).unwrap();
        let id = ledger.slot(index).unwrap().pending_request;
        ledger
            .apply_reading(cfg, index, id, ReadingIntent::Baseline, now, baseline)
            .unwrap();
        index
    }

    #[test]
    fn indices_are_assigned_in_creation_order() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        assert_eq!(ledger.create_slot(&mut cfg, terms(10, 5, 100)).unwrap(), 0);
        assert_eq!(ledger.create_slot(&mut cfg, terms(10, 5, 200)).unwrap(), 1);
        assert_eq!(ledger.slot(0).unwrap().pending_request, 1);
        assert_eq!(ledger.slot(1).unwrap().pending_request, 2);
        assert_eq!(cfg.total_staked, 300);
    }

    #[test]
    fn stopped_contract_allocates_nothing() {
        let mut cfg = config();
        cfg.stopped = true;
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);

        let err = ledger.create_slot(&mut cfg, terms(10, 5, 100)).unwrap_err();
        assert_eq!(error_name(err), "ContractStopped");
        assert!(ledger.wagers.is_empty());
        assert_eq!(cfg.next_request_id, 1);
        assert_eq!(cfg.total_staked, 0);
    }

    #[test]
    fn zero_values_are_rejected_at_creation() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let cases = [
            (terms(10, 5, 0), "ZeroStake"),
            (terms(0, 5, 100), "InvalidDuration"),
            (terms(10, 0, 100), "ZeroWeightChange"),
        ];
        for (bad, expected) in cases {
            let err = ledger.create_slot(&mut cfg, bad).unwrap_err();
            assert_eq!(error_name(err), expected);
        }
        assert!(ledger.wagers.is_empty());
    }

    #[test]
    fn ledger_caps_its_slots() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        for _ in 0..MAX_WAGERS_PER_LEDGER {
            ledger.create_slot(&mut cfg, terms(10, 5, 1)).unwrap();
        }
        let err = ledger.create_slot(&mut cfg, terms(10, 5, 1)).unwrap_err();
        assert_eq!(error_name(err), "LedgerFull");
    }

    #[test]
    fn resolved_slots_still_count_toward_the_cap() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        for _ in 0..MAX_WAGERS_PER_LEDGER {
            let index = ledger.create_slot(&mut cfg, terms(10, 5, 1)).unwrap();
            ledger.resolve_slot(&mut cfg, index).unwrap();
        }
        assert_eq!(ledger.live_count(), 0);

        let err = ledger.create_slot(&mut cfg, terms(10, 5, 1)).unwrap_err();
        assert_eq!(error_name(err), "LedgerFull");
    }

    #[test]
    fn baseline_activates_pending_slot() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = ledger.create_slot(&mut cfg, terms(1_000, 20, 23_456)).unwrap();

        let outcome = ledger
            .apply_reading(&mut cfg, index, 1, ReadingIntent::Baseline, 5_000, 200)
            .unwrap();
        assert_eq!(
            outcome,
            ReadingOutcome::Activated {
                baseline_weight: 200,
                expiration_deadline: 6_000
            }
        );
        let slot = ledger.slot(index).unwrap();
        assert_eq!(slot.state, WagerState::Active);
        assert_eq!(slot.pending_request, 0);
    }

    #[test]
    fn duplicate_baseline_is_ignored() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = active_slot(&mut ledger, &mut cfg, 200, 5_000);

        let outcome = ledger
            .apply_reading(&mut cfg, index, 1, ReadingIntent::Baseline, 9_000, 150)
            .unwrap();
        assert_eq!(outcome, ReadingOutcome::Ignored);
        assert_eq!(ledger.slot(index).unwrap().baseline_weight, 200);
        assert_eq!(ledger.slot(index).unwrap().expiration_deadline, 6_000);
    }

    #[test]
    fn reading_with_wrong_intent_is_ignored() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = ledger.create_slot(&mut cfg, terms(1_000, 20, 100)).unwrap();

        let outcome = ledger
            .apply_reading(&mut cfg, index, 1, ReadingIntent::Verification, 10, 0)
            .unwrap();
        assert_eq!(outcome, ReadingOutcome::Ignored);
        assert_eq!(ledger.slot(index).unwrap().state, WagerState::Pending);
    }

    #[test]
    fn unmet_target_returns_slot_to_active() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = active_slot(&mut ledger, &mut cfg, 200, 0);

        let VerificationStart::Requested { request_id } =
            ledger.begin_verification(&mut cfg, index, 10).unwrap()
        else {
            panic!("expected a verification request");
        };
        assert_eq!(ledger.slot(index).unwrap().state, WagerState::BeingVerified);

        let outcome = ledger
            .apply_reading(&mut cfg, index, request_id, ReadingIntent::Verification, 20, 190)
            .unwrap();
        assert_eq!(outcome, ReadingOutcome::Unchanged { current_weight: 190 });

        let slot = ledger.slot(index).unwrap();
        assert_eq!(slot.state, WagerState::Active);
        assert_eq!(slot.staked_amount, 23_456);
        assert_eq!(slot.desired_weight_change, 20);
        assert_eq!(cfg.total_staked, 23_456);
    }

    #[test]
    fn met_target_pays_and_zeroes_slot() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = active_slot(&mut ledger, &mut cfg, 200, 0);
        let VerificationStart::Requested { request_id } =
            ledger.begin_verification(&mut cfg, index, 10).unwrap()
        else {
            panic!("expected a verification request");
        };

        let outcome = ledger
            .apply_reading(&mut cfg, index, request_id, ReadingIntent::Verification, 1_000, 180)
            .unwrap();
        assert_eq!(
            outcome,
            ReadingOutcome::Verified {
                stake: 23_456,
                payout: 24_183
            }
        );
        assert_eq!(*ledger.slot(index).unwrap(), Wager::default());
        assert_eq!(cfg.total_staked, 0);

        let again = ledger
            .apply_reading(&mut cfg, index, request_id, ReadingIntent::Verification, 1_000, 180)
            .unwrap();
        assert_eq!(again, ReadingOutcome::Ignored);
    }

    #[test]
    fn expiry_beats_a_met_target() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = active_slot(&mut ledger, &mut cfg, 200, 0);
        let VerificationStart::Requested { request_id } =
            ledger.begin_verification(&mut cfg, index, 999).unwrap()
        else {
            panic!("expected a verification request");
        };

        let outcome = ledger
            .apply_reading(&mut cfg, index, request_id, ReadingIntent::Verification, 1_001, 0)
            .unwrap();
        assert_eq!(outcome, ReadingOutcome::Expired { stake: 23_456 });
        assert!(!ledger.slot(index).unwrap().is_live());
    }

    #[test]
    fn deadline_second_still_counts() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = active_slot(&mut ledger, &mut cfg, 200, 0);
        let VerificationStart::Requested { request_id } =
            ledger.begin_verification(&mut cfg, index, 500).unwrap()
        else {
            panic!("expected a verification request");
        };

        let outcome = ledger
            .apply_reading(&mut cfg, index, request_id, ReadingIntent::Verification, 1_000, 150)
            .unwrap();
        assert!(matches!(outcome, ReadingOutcome::Verified { .. }));
    }

    #[test]
    fn verifying_past_deadline_expires_without_request() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = active_slot(&mut ledger, &mut cfg, 200, 0);
        let next_id = cfg.next_request_id;

        let start = ledger.begin_verification(&mut cfg, index, 1_001).unwrap();
        assert_eq!(start, VerificationStart::Expired { stake: 23_456 });
        assert_eq!(cfg.next_request_id, next_id);
        assert_eq!(ledger.view().desired_changes, vec![0]);
    }

    #[test]
    fn verification_requires_an_active_slot() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = ledger.create_slot(&mut cfg, terms(1_000, 20, 100)).unwrap();

        let err = ledger.begin_verification(&mut cfg, index, 0).unwrap_err();
        assert_eq!(error_name(err), "WagerNotActive");

        let err = ledger.begin_verification(&mut cfg, 7, 0).unwrap_err();
        assert_eq!(error_name(err), "InvalidIndex");
    }

    #[test]
    fn resolved_slot_cannot_be_resolved_again() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = ledger.create_slot(&mut cfg, terms(10, 5, 100)).unwrap();

        assert_eq!(ledger.resolve_slot(&mut cfg, index).unwrap(), 100);
        let err = ledger.resolve_slot(&mut cfg, index).unwrap_err();
        assert_eq!(error_name(err), "InvalidIndex");
        assert_eq!(ledger.wagers.len(), 1);
    }

    #[test]
    fn gain_targets_use_negative_change() {
        let wager = Wager {
            baseline_weight: 150,
            desired_weight_change: -10,
            ..Wager::default()
        };
        assert!(!wager.target_met(159));
        assert!(wager.target_met(160));

        let loss = Wager {
            baseline_weight: 150,
            desired_weight_change: 10,
            ..Wager::default()
        };
        assert!(!loss.target_met(141));
        assert!(loss.target_met(140));
    }

    #[test]
    fn view_keeps_resolved_slots_in_place() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        assert_eq!(ledger.view(), WagerBook::default());

        active_slot(&mut ledger, &mut cfg, 200, 0);
        ledger.create_slot(&mut cfg, terms(50, -3, 777)).unwrap();
        ledger.resolve_slot(&mut cfg, 0).unwrap();

        let book = ledger.view();
        assert_eq!(book.expirations, vec![0, 0]);
        assert_eq!(book.desired_changes, vec![0, -3]);
        assert_eq!(book.amounts, vec![0, 777]);
        assert_eq!(book.baselines, vec![0, 0]);
        assert_eq!(ledger.live_count(), 1);
    }

    #[test]
    fn reissued_request_makes_old_id_stale() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let index = ledger.create_slot(&mut cfg, terms(1_000, 20, 100)).unwrap();

        let fresh = ledger.reissue_request(&mut cfg, index).unwrap();
        assert_eq!(fresh, 2);

        let stale = ledger
            .apply_reading(&mut cfg, index, 1, ReadingIntent::Baseline, 0, 200)
            .unwrap();
        assert_eq!(stale, ReadingOutcome::Ignored);

        let live = ledger
            .apply_reading(&mut cfg, index, fresh, ReadingIntent::Baseline, 0, 200)
            .unwrap();
        assert!(matches!(live, ReadingOutcome::Activated { .. }));

        let err = ledger.reissue_request(&mut cfg, index).unwrap_err();
        assert_eq!(error_name(err), "NoOutstandingRequest");
    }

    #[test]
    fn only_pending_slots_can_be_cancelled() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        let pending = ledger.create_slot(&mut cfg, terms(1_000, 20, 100)).unwrap();
        let active = active_slot(&mut ledger, &mut cfg, 200, 0);

        let err = ledger.cancel_pending(&mut cfg, active).unwrap_err();
        assert_eq!(error_name(err), "WagerNotPending");

        assert_eq!(ledger.cancel_pending(&mut cfg, pending).unwrap(), 100);
        assert_eq!(cfg.total_staked, 23_456);
        assert_eq!(ledger.active_indices(), vec![active]);
    }

    #[test]
    fn serialized_ledger_fits_its_space() {
        let mut cfg = config();
        let mut ledger = WagerLedger::new(Pubkey::new_unique(), 255);
        for i in 0..3 {
            let scale = ScaleId::Device(format!("{:0>32}", i));
            ledger
                .create_slot(
                    &mut cfg,
                    WagerTerms {
                        scale,
                        ..terms(i64::MAX, i64::MIN, u64::MAX / 4)
                    },
                )
                .unwrap();
        }
        let mut data = Vec::new();
        ledger.try_serialize(&mut data).unwrap();
        assert!(data.len() <= WagerLedger::space_for(3));
    }
}
