//! Wager lifecycle decisions. Each entry point moves the ledger and returns a
//! [`Transition`] describing what the instruction still has to do on-chain:
//! which events to emit, which request accounts to open or close, and how
//! much the vault owes the owner.

use anchor_lang::prelude::*;

use crate::constants::SEED_REQUEST;
use crate::errors::WeightWagersError;
use crate::events::{
    ReadingRequested, WagerActivated, WagerBeingVerified, WagerCancelled, WagerCreated,
    WagerEvent, WagerExpired, WagerUnchanged, WagerVerified,
};
use crate::state::{
    Config, OracleRequest, ReadingIntent, ReadingOutcome, ScaleId, VerificationStart,
    WagerLedger, WagerTerms,
};
use crate::utils::payout::ensure_payout_covered;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// In emission order
    pub events: Vec<WagerEvent>,
    /// Request accounts to create, with the address each one lives at
    pub open_requests: Vec<(Pubkey, OracleRequest)>,
    /// Lamports to move from the vault to the ledger owner
    pub payout: u64,
    /// Whether the answered request account is consumed
    pub close_request: bool,
}

pub fn request_address(ledger: &Pubkey, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SEED_REQUEST, ledger.as_ref(), &index.to_le_bytes()],
        &crate::ID,
    )
}

fn reading_requested(address: Pubkey, request: &OracleRequest) -> WagerEvent {
    WagerEvent::ReadingRequested(ReadingRequested {
        request_id: request.request_id,
        request: address,
        owner: request.owner,
        index: request.index,
        intent: request.intent,
        scale: request.scale.clone(),
    })
}

fn new_request(
    ledger_key: Pubkey,
    ledger: &WagerLedger,
    index: u32,
    intent: ReadingIntent,
    now: i64,
) -> Result<(Pubkey, OracleRequest)> {
    let slot = ledger.slot(index)?;
    let scale = slot
        .scale
        .clone()
        .ok_or(WeightWagersError::InvalidIndex)?;
    let (address, bump) = request_address(&ledger_key, index);
    Ok((
        address,
        OracleRequest {
            request_id: slot.pending_request,
            ledger: ledger_key,
            owner: ledger.owner,
            index,
            intent,
            scale,
            requested_at: now,
            bump,
        },
    ))
}

/// Allocates the slot and its baseline request. Returns the new index.
pub fn create_wager(
    config: &mut Config,
    ledger: &mut WagerLedger,
    ledger_key: Pubkey,
    terms: WagerTerms,
    now: i64,
) -> Result<(u32, Transition)> {
    let created = WagerCreated {
        owner: ledger.owner,
        index: 0,
        amount: terms.staked_amount,
        desired_weight_change: terms.desired_weight_change,
        expiration_duration: terms.expiration_duration,
    };
    let index = ledger.create_slot(config, terms)?;
    let (address, request) = new_request(ledger_key, ledger, index, ReadingIntent::Baseline, now)?;

    let transition = Transition {
        events: vec![
            WagerEvent::Created(WagerCreated { index, ..created }),
            reading_requested(address, &request),
        ],
        open_requests: vec![(address, request)],
        ..Transition::default()
    };
    Ok((index, transition))
}

/// Starts verification of `indices` in order. Expired slots resolve on the
/// spot; every other slot takes the next of `supplied_requests`, which must
/// be that slot's request address.
pub fn verify(
    config: &mut Config,
    ledger: &mut WagerLedger,
    ledger_key: Pubkey,
    indices: &[u32],
    supplied_requests: &[Pubkey],
    now: i64,
) -> Result<Transition> {
    let mut transition = Transition::default();
    let mut supplied = supplied_requests.iter();
    let owner = ledger.owner;

    for &index in indices {
        match ledger.begin_verification(config, index, now)? {
            VerificationStart::Expired { stake } => {
                transition.events.push(WagerEvent::Expired(WagerExpired {
                    owner,
                    index,
                    amount: stake,
                }));
            }
            VerificationStart::Requested { request_id } => {
                let (address, request) =
                    new_request(ledger_key, ledger, index, ReadingIntent::Verification, now)?;
                let key = supplied
                    .next()
                    .ok_or(WeightWagersError::MissingRequestAccount)?;
                require_keys_eq!(*key, address, WeightWagersError::RequestAccountMismatch);

                transition
                    .events
                    .push(WagerEvent::BeingVerified(WagerBeingVerified {
                        owner,
                        index,
                        request_id,
                    }));
                transition.events.push(reading_requested(address, &request));
                transition.open_requests.push((address, request));
            }
        }
    }
    Ok(transition)
}

/// The oracle authority may only answer device scales.
pub fn authorize_device_reading(
    config: &Config,
    reporter: &Pubkey,
    request: &OracleRequest,
) -> Result<()> {
    require_keys_eq!(
        *reporter,
        config.oracle_authority,
        WeightWagersError::UnauthorizedOracle
    );
    require!(
        matches!(request.scale, ScaleId::Device(_)),
        WeightWagersError::ScaleKindMismatch
    );
    Ok(())
}

/// Weight a fixture scale reports for this request.
pub fn fixture_weight(config: &Config, request: &OracleRequest) -> Result<u64> {
    require!(
        config.fixtures_enabled,
        WeightWagersError::FixturesDisabled
    );
    match &request.scale {
        ScaleId::Fixture(fixture) => Ok(fixture.reading(request.intent)),
        ScaleId::Device(_) => err!(WeightWagersError::ScaleKindMismatch),
    }
}

/// Applies a reading delivered against `request`. A superseded id leaves
/// everything, the request account included, as it was.
#[allow(clippy::too_many_arguments)]
pub fn deliver_reading(
    config: &mut Config,
    ledger: &mut WagerLedger,
    request: &OracleRequest,
    request_id: u64,
    weight: u64,
    now: i64,
    vault_lamports: u64,
    rent_floor: u64,
) -> Result<Transition> {
    if request_id != request.request_id {
        return Ok(Transition::default());
    }

    let owner = ledger.owner;
    let index = request.index;
    let outcome = ledger.apply_reading(config, index, request_id, request.intent, now, weight)?;

    let mut transition = Transition {
        close_request: true,
        ..Transition::default()
    };
    let event = match outcome {
        ReadingOutcome::Ignored => return Ok(Transition::default()),
        ReadingOutcome::Activated {
            baseline_weight,
            expiration_deadline,
        } => WagerEvent::Activated(WagerActivated {
            owner,
            index,
            baseline_weight,
            expiration_deadline,
        }),
        ReadingOutcome::Verified { payout, .. } => {
            // `total_staked` no longer counts this stake
            ensure_payout_covered(vault_lamports, rent_floor, config.total_staked, payout)?;
            transition.payout = payout;
            WagerEvent::Verified(WagerVerified {
                owner,
                index,
                amount: payout,
            })
        }
        ReadingOutcome::Expired { stake } => WagerEvent::Expired(WagerExpired {
            owner,
            index,
            amount: stake,
        }),
        ReadingOutcome::Unchanged { current_weight } => WagerEvent::Unchanged(WagerUnchanged {
            owner,
            index,
            current_weight,
        }),
    };
    transition.events.push(event);
    Ok(transition)
}

/// Gives a timed-out request a fresh id in place.
pub fn retry_reading(
    config: &mut Config,
    ledger: &mut WagerLedger,
    request: &mut OracleRequest,
    address: Pubkey,
    now: i64,
) -> Result<Transition> {
    require!(
        request.timed_out(now, config.request_timeout),
        WeightWagersError::RequestStillFresh
    );
    request.request_id = ledger.reissue_request(config, request.index)?;
    request.requested_at = now;

    Ok(Transition {
        events: vec![reading_requested(address, request)],
        ..Transition::default()
    })
}

/// Refunds a Pending slot whose baseline request timed out.
pub fn cancel_wager(
    config: &mut Config,
    ledger: &mut WagerLedger,
    request: &OracleRequest,
    now: i64,
) -> Result<Transition> {
    require!(
        request.timed_out(now, config.request_timeout),
        WeightWagersError::RequestStillFresh
    );
    let stake = ledger.cancel_pending(config, request.index)?;

    Ok(Transition {
        events: vec![WagerEvent::Cancelled(WagerCancelled {
            owner: ledger.owner,
            index: request.index,
            amount: stake,
        })],
        payout: stake,
        close_request: true,
        ..Transition::default()
    })
}
